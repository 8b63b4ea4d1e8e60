use crate::geometry::geo_traits::AlmostCollidesWith;
use crate::util::FPA;
use anyhow::Result;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, anchored at its top-left corner `(x, y)`.
/// The y-axis points down, as on a sheet lying on the cutting table.
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn try_new(x: f32, y: f32, w: f32, h: f32) -> Result<Self> {
        ensure!(
            w > 0.0 && h > 0.0,
            "invalid rectangle, x: {x}, y: {y}, w: {w}, h: {h}"
        );
        Ok(Rect { x, y, w, h })
    }

    /// Returns `Some` only if the rectangle has a strictly positive area.
    /// Used to discard the zero-area slivers a guillotine cut can produce.
    pub fn non_degenerate(x: f32, y: f32, w: f32, h: f32) -> Option<Self> {
        match w > 0.0 && h > 0.0 {
            true => Some(Rect { x, y, w, h }),
            false => None,
        }
    }

    pub fn x_max(&self) -> f32 {
        self.x + self.w
    }

    pub fn y_max(&self) -> f32 {
        self.y + self.h
    }

    pub fn area(&self) -> f32 {
        self.w * self.h
    }

    /// True if a `w` x `h` rectangle fits inside `self` without rotation.
    #[inline(always)]
    pub fn fits(&self, w: f32, h: f32) -> bool {
        self.w >= w && self.h >= h
    }

    /// True if both dimensions of `self` equal those of `other`.
    pub fn same_size(&self, other: &Rect) -> bool {
        self.w == other.w && self.h == other.h
    }

    /// True if `other` lies entirely within `self`, with a tolerance for floating point precision.
    pub fn almost_contains(&self, other: &Rect) -> bool {
        FPA::from(self.x) <= FPA::from(other.x)
            && FPA::from(self.y) <= FPA::from(other.y)
            && FPA::from(self.x_max()) >= FPA::from(other.x_max())
            && FPA::from(self.y_max()) >= FPA::from(other.y_max())
    }

    /// Returns a new rectangle with the same centre but scaled by `factor`.
    pub fn scale(self, factor: f32) -> Self {
        let dx = self.w * (factor - 1.0) / 2.0;
        let dy = self.h * (factor - 1.0) / 2.0;
        Rect {
            x: self.x - dx,
            y: self.y - dy,
            w: self.w + 2.0 * dx,
            h: self.h + 2.0 * dy,
        }
    }

    pub fn centroid(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

impl AlmostCollidesWith<Rect> for Rect {
    #[inline(always)]
    fn almost_collides_with(&self, other: &Rect) -> bool {
        FPA(f32::max(self.x, other.x)) < FPA(f32::min(self.x_max(), other.x_max()))
            && FPA(f32::max(self.y, other.y)) < FPA(f32::min(self.y_max(), other.y_max()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, 10.0; "zero width")]
    #[test_case(10.0, 0.0; "zero height")]
    #[test_case(-5.0, 10.0; "negative width")]
    fn degenerate_rect_is_rejected(w: f32, h: f32) {
        assert!(Rect::try_new(0.0, 0.0, w, h).is_err());
        assert!(Rect::non_degenerate(0.0, 0.0, w, h).is_none());
    }

    #[test]
    fn fit_is_orientation_sensitive() {
        let region = Rect::try_new(0.0, 0.0, 100.0, 50.0).unwrap();
        assert!(region.fits(100.0, 50.0));
        assert!(region.fits(40.0, 20.0));
        assert!(!region.fits(50.0, 100.0));
    }

    #[test]
    fn touching_rects_do_not_collide() {
        let a = Rect::try_new(0.0, 0.0, 10.0, 10.0).unwrap();
        let b = Rect::try_new(10.0, 0.0, 10.0, 10.0).unwrap();
        let c = Rect::try_new(5.0, 5.0, 10.0, 10.0).unwrap();
        //shared cut line computed with rounding error
        let d = Rect::try_new(9.999999, 0.0, 10.0, 10.0).unwrap();

        assert!(!a.almost_collides_with(&b));
        assert!(!a.almost_collides_with(&d));
        assert!(a.almost_collides_with(&c));
    }

    #[test]
    fn containment_is_directional() {
        let sheet = Rect::try_new(0.0, 0.0, 100.0, 100.0).unwrap();
        let piece = Rect::try_new(20.0, 30.0, 10.0, 10.0).unwrap();
        assert!(sheet.almost_contains(&piece));
        assert!(!piece.almost_contains(&sheet));
    }

    #[test]
    fn scale_keeps_centroid() {
        let r = Rect::try_new(10.0, 20.0, 100.0, 50.0).unwrap();
        let scaled = r.scale(1.10);
        let (cx, cy) = scaled.centroid();
        assert_eq!(FPA(cx), FPA(60.0));
        assert_eq!(FPA(cy), FPA(45.0));
        assert_eq!(FPA(scaled.w), FPA(110.0));
        assert!(scaled.almost_contains(&r));
    }
}
