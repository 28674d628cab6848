//! Setup errors - everything that can stop `init` from producing a graph

use std::fmt;
use wasm_bindgen::JsValue;

use crate::renderer::ShaderStage;

/// Fatal, init-time failures. Once a graph exists nothing else can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupError {
    NoWindow,
    NoDocument,
    NoCanvas(String),
    ContextCreation(String),
    ShaderSource { name: String, reason: String },
    ShaderCompile { stage: ShaderStage, log: String },
    ProgramLink(String),
    MissingBinding(&'static str),
    BufferCreation,
    SensorUnavailable,
    SensorListener(String),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::NoWindow => write!(f, "No window found"),
            SetupError::NoDocument => write!(f, "No document found"),
            SetupError::NoCanvas(id) => write!(f, "No canvas with id '{}' found", id),
            SetupError::ContextCreation(e) => write!(f, "WebGL context creation failed: {}", e),
            SetupError::ShaderSource { name, reason } => write!(f, "Could not load shader {}: {}", name, reason),
            SetupError::ShaderCompile { stage, log } => write!(f, "Could not compile {} shader:\n{}", stage, log),
            SetupError::ProgramLink(log) => write!(f, "Could not link program:\n{}", log),
            SetupError::MissingBinding(name) => write!(f, "Program does not expose '{}'", name),
            SetupError::BufferCreation => write!(f, "Could not create vertex buffer"),
            SetupError::SensorUnavailable => write!(f, "No accelerometer available"),
            SetupError::SensorListener(e) => write!(f, "Could not register sensor listener: {}", e),
        }
    }
}

impl std::error::Error for SetupError {}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
