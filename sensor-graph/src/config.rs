//! Compile-time settings and construction-time knobs

use crate::renderer::Rgba;

/// Samples kept on screen, one per frame
pub const SENSOR_HISTORY_LENGTH: usize = 100;

/// Target accelerometer rate (Hz)
pub const SENSOR_REFRESH_RATE_HZ: u32 = 100;

/// EMA smoothing coefficient - lower = smoother, 1 = raw
pub const FILTER_ALPHA: f32 = 0.1;

/// Shader resources, fetched relative to the page
pub const VERTEX_SHADER_ASSET: &str = "shader.glslv";
pub const FRAGMENT_SHADER_ASSET: &str = "shader.glslf";

/// Canvas the graph draws into
pub const CANVAS_ID: &str = "sensor-graph-canvas";

/// Opaque black
pub const BACKGROUND: Rgba = [0.0, 0.0, 0.0, 1.0];

/// Console log threshold
pub const LOG_LEVEL: log::Level = log::Level::Info;

/// Settings fixed for the lifetime of one graph
#[derive(Debug, Clone, Copy)]
pub struct GraphConfig {
    pub filter_alpha: f32,
    pub clear_color: Rgba,
}

impl GraphConfig {
    pub fn with_filter_alpha(mut self, alpha: f32) -> Self {
        self.filter_alpha = alpha;
        self
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            filter_alpha: FILTER_ALPHA,
            clear_color: BACKGROUND,
        }
    }
}
