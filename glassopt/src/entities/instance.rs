use crate::entities::{Piece, PieceDemand, Sheet, expand_demands};
use anyhow::{Result, ensure};
use itertools::Itertools;

/// A cutting problem: the stock sheet and the pieces that have to be cut from it.
#[derive(Clone, Debug)]
pub struct Instance {
    pub name: String,
    pub sheet: Sheet,
    pub demands: Vec<PieceDemand>,
}

impl Instance {
    pub fn try_new(name: impl Into<String>, sheet: Sheet, demands: Vec<PieceDemand>) -> Result<Self> {
        ensure!(
            demands.iter().map(|d| &d.id).all_unique(),
            "piece ids must be unique, ids: {:?}",
            demands.iter().map(|d| &d.id).collect_vec()
        );
        Ok(Instance {
            name: name.into(),
            sheet,
            demands,
        })
    }

    /// All unit pieces of the instance
    pub fn pieces(&self) -> Vec<Piece> {
        expand_demands(&self.demands)
    }

    pub fn demand(&self, id: &str) -> Option<&PieceDemand> {
        self.demands.iter().find(|d| d.id == id)
    }

    pub fn total_piece_qty(&self) -> usize {
        self.demands.iter().map(|d| d.quantity).sum()
    }
}
