//! Deterministic guillotine cutting layouts for rectangular stock sheets.
//!
//! Pieces are sorted by decreasing area and placed one by one in the free region
//! that leaves the least area behind (Best Area Fit). Every placement splits the
//! region it lands in with a single guillotine cut. When a sheet is full, a new
//! one is started with the leftover pieces.

/// Entities to model cutting problems
pub mod entities;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// The guillotine packer and the multi-sheet driver around it
pub mod packer;

/// Usage and waste statistics
pub mod stats;

/// Helper functions which do not belong to any specific module
pub mod util;
