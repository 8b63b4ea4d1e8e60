use crate::packer::Termination;
use serde::{Deserialize, Serialize};

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// The stock sheet every piece is cut from
    pub sheet: ExtSheet,
    /// Set of pieces to be produced
    pub pieces: Vec<ExtPiece>,
}

/// External representation of a [`Sheet`](crate::entities::Sheet).
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtSheet {
    pub width: f32,
    pub height: f32,
}

/// External representation of a [`PieceDemand`](crate::entities::PieceDemand).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPiece {
    /// Unique identifier of the piece
    pub id: String,
    pub width: f32,
    pub height: f32,
    /// Amount of times this piece has to be produced
    #[serde(default = "default_quantity")]
    pub quantity: u64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<String>,
}

fn default_quantity() -> u64 {
    1
}

/// External representation of a [`PackSolution`](crate::packer::PackSolution).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Sheets which compose the solution, in the order they were generated
    pub sheets: Vec<ExtSheetLayout>,
    /// Sum of the area of the placed pieces divided by the sum of the area of the sheets
    pub usage: f32,
    /// Ids of the pieces too large for the sheet
    #[serde(default)]
    pub oversized_pieces: Vec<String>,
    /// Ids of the pieces left over when the run stopped early
    #[serde(default)]
    pub unplaced_pieces: Vec<String>,
    pub termination: Termination,
    /// The time it took to generate the solution in milliseconds
    pub run_time_ms: u64,
}

/// External representation of a [`SheetResult`](crate::entities::SheetResult).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSheetLayout {
    pub width: f32,
    pub height: f32,
    /// The pieces placed on the sheet and where they were placed
    pub placements: Vec<ExtPlacement>,
    /// Some statistics about the sheet
    #[serde(flatten)]
    pub statistics: ExtSheetStats,
}

/// External representation of a [`Placement`](crate::entities::Placement).
/// `(x, y)` is the top-left corner of the piece on the sheet.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacement {
    /// Id of the unit piece, `{demand_id}_{instance}`
    pub piece_id: String,
    /// Id of the piece in the instance
    pub demand_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<String>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// External representation of [`SheetStats`](crate::stats::SheetStats).
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtSheetStats {
    pub usage: f32,
    pub waste: f32,
    pub placed_count: usize,
}
