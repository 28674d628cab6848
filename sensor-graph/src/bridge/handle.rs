//! JS-facing graph handle
//!
//! `init` builds everything against the page; the returned handle's `step`
//! is called once per animation frame. Nothing else is exposed.

use wasm_bindgen::prelude::*;

use super::assets::load_shaders;
use crate::config::{GraphConfig, CANVAS_ID, SENSOR_REFRESH_RATE_HZ};
use crate::error::SetupError;
use crate::graph::SensorGraph;
use crate::renderer::WebGl;
use crate::sensor::DeviceMotionSensor;

/// Opaque handle to a running graph
#[wasm_bindgen]
pub struct SensorGraphHandle {
    graph: SensorGraph<WebGl, DeviceMotionSensor>,
}

#[wasm_bindgen]
impl SensorGraphHandle {
    /// Advance one frame
    pub fn step(&mut self) {
        self.graph.step();
    }
}

/// Load shaders, open the canvas and the sensor, build the graph.
///
/// The sensor is opened before any GL object exists, so a failure at any
/// point drops what was already acquired.
pub async fn create(width: i32, height: i32) -> Result<SensorGraphHandle, SetupError> {
    let window = web_sys::window().ok_or(SetupError::NoWindow)?;

    let shaders = load_shaders(&window).await?;
    let sensor = DeviceMotionSensor::open(&window, SENSOR_REFRESH_RATE_HZ)?;
    let gl = WebGl::from_canvas(&window, CANVAS_ID)?;

    let graph = SensorGraph::init(gl, sensor, &shaders, &GraphConfig::default(), width, height)?;
    Ok(SensorGraphHandle { graph })
}
