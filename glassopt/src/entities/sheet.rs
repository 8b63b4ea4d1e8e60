use crate::entities::Piece;
use crate::geometry::primitives::Rect;
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// A stock sheet from which pieces are cut. Every sheet in a run has the same dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub width: f32,
    pub height: f32,
}

impl Sheet {
    pub fn try_new(width: f32, height: f32) -> Result<Self> {
        ensure!(
            width > 0.0 && height > 0.0,
            "sheet dimensions must be positive, width: {width}, height: {height}"
        );
        Ok(Sheet { width, height })
    }

    /// The full sheet as a rectangle anchored at the origin
    pub fn rect(&self) -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            w: self.width,
            h: self.height,
        }
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// True if the piece fits on an empty sheet in its given orientation.
    pub fn can_hold(&self, piece: &Piece) -> bool {
        piece.w <= self.width && piece.h <= self.height
    }
}
