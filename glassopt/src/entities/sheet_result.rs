use crate::entities::{Placement, Sheet};
use crate::stats::SheetStats;

/// Immutable snapshot of one packed sheet: the placements and their derived statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetResult {
    pub sheet: Sheet,
    pub placements: Vec<Placement>,
    pub stats: SheetStats,
}

impl SheetResult {
    pub fn new(sheet: Sheet, placements: Vec<Placement>) -> Self {
        let stats = SheetStats::compute(&sheet, &placements);
        SheetResult {
            sheet,
            placements,
            stats,
        }
    }

    pub fn width(&self) -> f32 {
        self.sheet.width
    }

    pub fn height(&self) -> f32 {
        self.sheet.height
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
