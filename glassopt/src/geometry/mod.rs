pub mod geo_traits;
pub mod primitives;
