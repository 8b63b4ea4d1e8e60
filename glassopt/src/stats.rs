use crate::entities::{Placement, Sheet, SheetResult};

/// Utilization figures of a single sheet
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetStats {
    /// Fraction of the sheet area covered by placed pieces, in `[0, 1]`
    pub usage: f32,
    /// Fraction of the sheet area left over, `1 - usage`
    pub waste: f32,
    pub placed_count: usize,
}

impl SheetStats {
    pub fn compute(sheet: &Sheet, placements: &[Placement]) -> Self {
        let usage = placed_area(placements) / sheet.area();
        SheetStats {
            usage,
            waste: 1.0 - usage,
            placed_count: placements.len(),
        }
    }
}

/// Sum of the areas of all placements
pub fn placed_area(placements: &[Placement]) -> f32 {
    placements.iter().map(|p| p.rect.area()).sum()
}

/// Placed area over sheet area across a sequence of sheets. Zero if there are no sheets.
pub fn combined_usage(sheets: &[SheetResult]) -> f32 {
    let sheet_area = sheets.iter().map(|s| s.sheet.area()).sum::<f32>();
    match sheet_area > 0.0 {
        true => sheets.iter().map(|s| placed_area(&s.placements)).sum::<f32>() / sheet_area,
        false => 0.0,
    }
}
