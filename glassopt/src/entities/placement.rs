use crate::entities::{Piece, PieceId};
use crate::geometry::primitives::Rect;

/// Where a piece landed on a sheet
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub piece_id: PieceId,
    /// The area of the sheet occupied by the piece
    pub rect: Rect,
}

impl Placement {
    /// Places `piece` with its top-left corner at `(x, y)`
    pub fn new(piece: &Piece, x: f32, y: f32) -> Self {
        Placement {
            piece_id: piece.id.clone(),
            rect: Rect {
                x,
                y,
                w: piece.w,
                h: piece.h,
            },
        }
    }
}
