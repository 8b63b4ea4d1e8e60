/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod config;
mod fpa;

#[doc(inline)]
pub use config::DEFAULT_MAX_SHEETS;
#[doc(inline)]
pub use config::PackConfig;
#[doc(inline)]
pub use fpa::FPA;
