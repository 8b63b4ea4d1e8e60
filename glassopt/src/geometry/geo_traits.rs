/// Trait for types that can detect 'almost-collisions' between `Self` and `T`.
///
/// Only overlapping interiors count as a collision: two pieces sharing a cut line do not collide.
///
/// Due to floating point arithmetic precision, two rectangles separated by a cut computed in f32
/// can appear to overlap by a tiny amount. This trait tolerates such overlaps, so that only clear
/// collisions are reported.
pub trait AlmostCollidesWith<T> {
    fn almost_collides_with(&self, other: &T) -> bool;
}
