use anyhow::{Result, ensure};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identifies a unit piece: the demand it was expanded from and its index among the copies.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId {
    pub demand_id: String,
    pub instance: usize,
}

impl Display for PieceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.demand_id, self.instance)
    }
}

/// A single rectangular piece to be cut out of a sheet.
/// Pieces are never rotated: `w` runs along the sheet width, `h` along the sheet height.
#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    pub id: PieceId,
    pub w: f32,
    pub h: f32,
}

impl Piece {
    pub fn try_new(id: PieceId, w: f32, h: f32) -> Result<Self> {
        ensure!(
            w > 0.0 && h > 0.0,
            "piece {id} must have positive dimensions, w: {w}, h: {h}"
        );
        Ok(Piece { id, w, h })
    }

    /// Area in f64, f32 cannot tell apart areas beyond 2^24 mm²
    pub fn area(&self) -> f64 {
        f64::from(self.w) * f64::from(self.h)
    }
}

/// A requested piece size together with how many copies of it are needed.
#[derive(Clone, Debug, PartialEq)]
pub struct PieceDemand {
    pub id: String,
    pub w: f32,
    pub h: f32,
    pub quantity: usize,
    /// Free-form text shown next to the piece in the exports
    pub label: Option<String>,
}

impl PieceDemand {
    pub fn try_new(id: impl Into<String>, w: f32, h: f32, quantity: usize) -> Result<Self> {
        let id = id.into();
        ensure!(
            w > 0.0 && h > 0.0,
            "piece {id} must have positive dimensions, w: {w}, h: {h}"
        );
        ensure!(quantity >= 1, "piece {id} must have a quantity of at least 1");
        Ok(PieceDemand {
            id,
            w,
            h,
            quantity,
            label: None,
        })
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The unit pieces this demand expands into
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        (0..self.quantity).map(|instance| Piece {
            id: PieceId {
                demand_id: self.id.clone(),
                instance,
            },
            w: self.w,
            h: self.h,
        })
    }
}

/// Expands every demand into `quantity` unit pieces, preserving the order of the demands.
pub fn expand_demands(demands: &[PieceDemand]) -> Vec<Piece> {
    demands.iter().flat_map(|d| d.pieces()).collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_derives_unique_ids() {
        let demands = vec![
            PieceDemand::try_new("1", 1821.0, 366.0, 2).unwrap(),
            PieceDemand::try_new("3", 1821.0, 771.6, 1).unwrap(),
        ];
        let pieces = expand_demands(&demands);

        let ids = pieces.iter().map(|p| p.id.to_string()).collect_vec();
        assert_eq!(ids, vec!["1_0", "1_1", "3_0"]);
        assert!(pieces.iter().map(|p| &p.id).all_unique());
        assert_eq!(pieces[2].w, 1821.0);
        assert_eq!(pieces[2].h, 771.6);
    }

    #[test]
    fn empty_demands_expand_to_nothing() {
        assert!(expand_demands(&[]).is_empty());
    }

    #[test]
    fn invalid_demands_are_rejected() {
        assert!(PieceDemand::try_new("a", 0.0, 10.0, 1).is_err());
        assert!(PieceDemand::try_new("a", 10.0, 10.0, 0).is_err());
        assert!(
            Piece::try_new(
                PieceId {
                    demand_id: "a".into(),
                    instance: 0
                },
                10.0,
                -1.0
            )
            .is_err()
        );
    }
}
