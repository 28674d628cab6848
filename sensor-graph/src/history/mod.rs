//! History module - rolling sample storage and plot x coordinates
//!
//! Re-exports only. All logic in submodules.

mod ring;
mod positions;

pub use ring::HistoryBuffer;
pub use positions::PositionTable;
