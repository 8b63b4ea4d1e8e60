use std::time::Instant;

use crate::entities::{Piece, Sheet, SheetResult};
use crate::packer::GuillotinePacker;
use crate::stats;
use crate::util::{PackConfig, assertions};
use itertools::Itertools;
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use thousands::Separable;

/// Why a multi-sheet run stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Every piece that fits on a sheet has been placed
    Completed,
    /// A fresh sheet could not hold any of the remaining pieces
    NoProgress,
    /// The maximum number of sheets was reached with pieces remaining
    SheetLimit,
}

/// Outcome of a multi-sheet run: the packed sheets plus everything that did not end up on one.
#[derive(Clone, Debug)]
pub struct PackSolution {
    /// Packed sheets, in the order they were generated
    pub sheets: Vec<SheetResult>,
    /// Pieces larger than the sheet in at least one dimension, never attempted
    pub oversized: Vec<Piece>,
    /// Pieces left over when the run was cut short
    pub unplaced: Vec<Piece>,
    pub termination: Termination,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl PackSolution {
    /// Placed area over sheet area across all sheets
    pub fn usage(&self) -> f32 {
        stats::combined_usage(&self.sheets)
    }

    pub fn placed_count(&self) -> usize {
        self.sheets.iter().map(|s| s.stats.placed_count).sum()
    }

    /// True if every input piece was placed on a sheet
    pub fn is_complete(&self) -> bool {
        self.oversized.is_empty() && self.unplaced.is_empty()
    }
}

/// Fills sheets one after the other, each with a fresh [`GuillotinePacker`] fed the leftovers of the previous one.
pub struct MultiSheetPacker {
    pub sheet: Sheet,
    pub config: PackConfig,
}

impl MultiSheetPacker {
    pub fn new(sheet: Sheet, config: PackConfig) -> Self {
        Self { sheet, config }
    }

    pub fn solve(&self, pieces: Vec<Piece>) -> PackSolution {
        let start = Instant::now();
        #[cfg(debug_assertions)]
        let input = pieces.clone();

        let (mut remaining, oversized): (Vec<Piece>, Vec<Piece>) =
            pieces.into_iter().partition(|p| self.sheet.can_hold(p));

        if !oversized.is_empty() {
            warn!(
                "[MSP] {} pieces are larger than the {}x{} sheet and will be ignored: [{}]",
                oversized.len(),
                self.sheet.width,
                self.sheet.height,
                oversized.iter().map(|p| &p.id).join(", ")
            );
        }

        let mut sheets = vec![];
        let mut termination = Termination::Completed;

        while !remaining.is_empty() {
            if sheets.len() >= self.config.max_sheets {
                error!(
                    "[MSP] sheet limit of {} reached, {} pieces remain unplaced",
                    self.config.max_sheets,
                    remaining.len()
                );
                termination = Termination::SheetLimit;
                break;
            }

            let n_attempted = remaining.len();
            let mut packer = GuillotinePacker::new(self.sheet);
            let unplaced = packer.pack(remaining);
            let result = packer.into_result();
            debug_assert!(assertions::sheet_stats_consistent(&result));

            info!(
                "[MSP] sheet {}: placed {}/{} pieces, usage {:.3}%",
                sheets.len(),
                result.stats.placed_count,
                n_attempted,
                result.stats.usage * 100.0
            );
            sheets.push(result);

            if unplaced.len() == n_attempted && !unplaced.is_empty() {
                error!(
                    "[MSP] no piece could be placed on an empty sheet, aborting with {} pieces unplaced",
                    unplaced.len()
                );
                remaining = unplaced;
                termination = Termination::NoProgress;
                break;
            }
            remaining = unplaced;
        }

        let solution = PackSolution {
            sheets,
            oversized,
            unplaced: remaining,
            termination,
            time_stamp: Instant::now(),
        };

        #[cfg(debug_assertions)]
        debug_assert!(assertions::pieces_conserved(
            &input,
            &solution.sheets,
            &solution.oversized,
            &solution.unplaced
        ));

        debug!("[MSP] terminated with {:?}", solution.termination);
        info!(
            "[MSP] packed {} pieces on {} sheets in {}µs, usage {:.3}%",
            solution.placed_count().separate_with_commas(),
            solution.sheets.len(),
            start.elapsed().as_micros().separate_with_commas(),
            solution.usage() * 100.0
        );

        solution
    }
}

/// Packs all `pieces` onto as many `sheet`s as needed, reporting what could not be placed.
pub fn pack_sheets(sheet: Sheet, pieces: Vec<Piece>, config: PackConfig) -> PackSolution {
    MultiSheetPacker::new(sheet, config).solve(pieces)
}

/// Packs all `pieces` onto as many `sheet`s as needed, using the default [`PackConfig`].
/// Pieces that cannot fit on any sheet are dropped with a warning.
pub fn pack_multiple_sheets(sheet: Sheet, pieces: Vec<Piece>) -> Vec<SheetResult> {
    pack_sheets(sheet, pieces, PackConfig::default()).sheets
}
