//! Bridge module - JS ↔ Rust boundary
//! 
//! Re-exports only in mod.rs, logic in submodules.

mod assets;
mod handle;

pub use handle::{create, SensorGraphHandle};
