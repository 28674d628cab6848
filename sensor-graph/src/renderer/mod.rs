//! Renderer module - WebGL line strips for the sensor history
//! 
//! Re-exports only. All logic in submodules.

mod backend;
mod view;
mod pipeline;
mod webgl;
#[cfg(test)]
pub(crate) mod headless;

pub use backend::{GlBackend, GlInfo, Rgba, ShaderStage, check_gl_error};
pub use view::{StridedView, ViewError};
pub use pipeline::{
    RenderPipeline, ShaderSources, AXIS_COLORS,
    POSITION_ATTRIBUTE, SENSOR_ATTRIBUTE, COLOR_UNIFORM,
};
pub use webgl::WebGl;
