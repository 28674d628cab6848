//! Sensor Graph - scrolling accelerometer plot in WebGL
//! 
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

mod bridge;

pub mod config;
pub mod error;
pub mod graph;
pub mod history;
pub mod renderer;
pub mod sensor;


use wasm_bindgen::prelude::*;

pub use bridge::SensorGraphHandle;
pub use error::SetupError;
pub use graph::{Phase, SensorGraph};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(config::LOG_LEVEL).ok();
}

/// Set up the graph - must resolve before calling `step` on the handle.
/// Rejects on any setup failure.
#[wasm_bindgen]
pub async fn init(width: i32, height: i32) -> Result<SensorGraphHandle, JsValue> {
    match bridge::create(width, height).await {
        Ok(handle) => {
            log::info!("✅ Sensor graph initialized ({}x{})", width, height);
            Ok(handle)
        }
        Err(err) => {
            log::error!("Sensor graph setup failed: {}", err);
            Err(err.into())
        }
    }
}
