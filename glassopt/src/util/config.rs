use serde::{Deserialize, Serialize};

/// Upper bound on the number of sheets produced by a single multi-sheet run.
pub const DEFAULT_MAX_SHEETS: usize = 100;

///Configuration of the multi-sheet orchestration
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PackConfig {
    ///Maximum number of sheets to open before giving up on the remaining pieces
    #[serde(default = "default_max_sheets")]
    pub max_sheets: usize,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            max_sheets: DEFAULT_MAX_SHEETS,
        }
    }
}

fn default_max_sheets() -> usize {
    DEFAULT_MAX_SHEETS
}
