//! GPU backend seam - the GL calls the pipeline needs, nothing more
//!
//! WebGL in the browser, a recording backend in tests.

use std::fmt;

/// RGBA color, 0-1 per channel
pub type Rgba = [f32; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Driver strings, logged once at startup
#[derive(Debug, Clone, Default)]
pub struct GlInfo {
    pub version: String,
    pub vendor: String,
    pub renderer: String,
    pub extensions: String,
}

/// Minimal GLES2-style API.
///
/// Object handles are owned values; deleting consumes them.
pub trait GlBackend {
    type Shader;
    type Program;
    type Buffer;
    type Uniform;

    fn info(&self) -> GlInfo;

    /// Compile one stage. `Err` carries the compiler log; nothing is left allocated.
    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<Self::Shader, String>;

    /// Link two compiled stages. `Err` carries the linker log; nothing is left allocated.
    fn link_program(&mut self, vertex: &Self::Shader, fragment: &Self::Shader) -> Result<Self::Program, String>;

    fn delete_shader(&mut self, shader: Self::Shader);
    fn delete_program(&mut self, program: Self::Program);

    fn attrib_location(&mut self, program: &Self::Program, name: &str) -> Option<u32>;
    fn uniform_location(&mut self, program: &Self::Program, name: &str) -> Option<Self::Uniform>;

    fn create_buffer(&mut self) -> Option<Self::Buffer>;
    fn delete_buffer(&mut self, buffer: Self::Buffer);

    /// Replace the buffer's contents
    fn upload(&mut self, buffer: &Self::Buffer, bytes: &[u8]);

    fn viewport(&mut self, width: i32, height: i32);

    /// Clear color and depth
    fn clear(&mut self, color: Rgba);

    fn use_program(&mut self, program: &Self::Program);

    /// Enable `location` as one float per vertex read from `buffer`
    fn attrib_pointer(&mut self, location: u32, buffer: &Self::Buffer, stride: usize, offset: usize);

    fn uniform_color(&mut self, uniform: &Self::Uniform, color: Rgba);

    fn draw_line_strip(&mut self, count: usize);

    /// Pop one pending error code, `None` when clean
    fn next_error(&mut self) -> Option<u32>;
}

/// Drain and log every pending GL error. Never fatal.
pub fn check_gl_error<G: GlBackend>(gl: &mut G, op: &str) {
    while let Some(code) = gl.next_error() {
        log::warn!("after {}() glError (0x{:x})", op, code);
    }
}
