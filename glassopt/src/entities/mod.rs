mod instance;
mod piece;
mod placement;
mod sheet;
mod sheet_result;

#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use piece::Piece;
#[doc(inline)]
pub use piece::PieceDemand;
#[doc(inline)]
pub use piece::PieceId;
#[doc(inline)]
pub use piece::expand_demands;
#[doc(inline)]
pub use placement::Placement;
#[doc(inline)]
pub use sheet::Sheet;
#[doc(inline)]
pub use sheet_result::SheetResult;
