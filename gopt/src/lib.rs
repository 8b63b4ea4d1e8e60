use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod io;

/// Instant the process started, used for log timestamps and run times
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
