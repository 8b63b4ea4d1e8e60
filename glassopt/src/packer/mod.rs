/// Single-sheet guillotine packer
pub mod guillotine;

/// Orchestration of the single-sheet packer over as many sheets as needed
pub mod multi_sheet;

#[doc(inline)]
pub use guillotine::GuillotinePacker;
#[doc(inline)]
pub use multi_sheet::MultiSheetPacker;
#[doc(inline)]
pub use multi_sheet::PackSolution;
#[doc(inline)]
pub use multi_sheet::Termination;
#[doc(inline)]
pub use multi_sheet::pack_multiple_sheets;
#[doc(inline)]
pub use multi_sheet::pack_sheets;
