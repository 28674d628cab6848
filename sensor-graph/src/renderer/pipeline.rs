//! Line-strip pipeline - one program, three draws per frame
//!
//! `vPositionX` reads the constant position table, `vSensorValue` reads one
//! axis of the history window, `uFragColor` picks the line color.

use super::backend::{check_gl_error, GlBackend, Rgba, ShaderStage};
use super::view::StridedView;
use crate::error::SetupError;
use crate::sensor::{Axis, Sample};

/// Attribute carrying the per-vertex x coordinate
pub const POSITION_ATTRIBUTE: &str = "vPositionX";
/// Attribute carrying the plotted sensor value
pub const SENSOR_ATTRIBUTE: &str = "vSensorValue";
/// Line color uniform
pub const COLOR_UNIFORM: &str = "uFragColor";

/// Line colors
mod colors {
    use super::Rgba;

    pub const YELLOW: Rgba = [1.0, 1.0, 0.0, 1.0];
    pub const MAGENTA: Rgba = [1.0, 0.0, 1.0, 1.0];
    pub const CYAN: Rgba = [0.0, 1.0, 1.0, 1.0];
}

/// Draw order and color per axis
pub const AXIS_COLORS: [(Axis, Rgba); 3] = [
    (Axis::X, colors::YELLOW),
    (Axis::Y, colors::MAGENTA),
    (Axis::Z, colors::CYAN),
];

/// Vertex and fragment shader text
#[derive(Debug, Clone)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

/// Linked program plus every handle `draw` needs. Either fully built or not at all.
pub struct RenderPipeline<G: GlBackend> {
    program: G::Program,
    position_x: u32,
    sensor_value: u32,
    frag_color: G::Uniform,
    position_buffer: G::Buffer,
    sample_buffer: G::Buffer,
    position_stride: usize,
    vertex_count: usize,
}

struct Bindings<G: GlBackend> {
    position_x: u32,
    sensor_value: u32,
    frag_color: G::Uniform,
    position_buffer: G::Buffer,
    sample_buffer: G::Buffer,
}

impl<G: GlBackend> RenderPipeline<G> {
    /// Build the program, resolve its bindings and upload the position table.
    ///
    /// On error every GL object created along the way has been deleted.
    pub fn initialize(
        gl: &mut G,
        sources: &ShaderSources,
        positions: &[f32],
    ) -> Result<Self, SetupError> {
        let program = create_program(gl, &sources.vertex, &sources.fragment)?;

        let bindings = match resolve_bindings(gl, &program) {
            Ok(b) => b,
            Err(err) => {
                gl.delete_program(program);
                return Err(err);
            }
        };

        let layout = StridedView::packed(positions);
        gl.upload(&bindings.position_buffer, layout.base());
        check_gl_error(gl, "bufferData");

        Ok(Self {
            program,
            position_x: bindings.position_x,
            sensor_value: bindings.sensor_value,
            frag_color: bindings.frag_color,
            position_buffer: bindings.position_buffer,
            sample_buffer: bindings.sample_buffer,
            position_stride: layout.stride(),
            vertex_count: layout.count(),
        })
    }

    /// Clear the frame, select the program, bind the position table and
    /// upload this frame's history window. Axis draws only re-point into it.
    pub fn begin_frame(&self, gl: &mut G, clear_color: Rgba, window: &[Sample]) {
        gl.clear(clear_color);
        check_gl_error(gl, "glClear");

        gl.use_program(&self.program);
        check_gl_error(gl, "glUseProgram");

        gl.attrib_pointer(self.position_x, &self.position_buffer, self.position_stride, 0);
        check_gl_error(gl, "glVertexAttribPointer");

        gl.upload(&self.sample_buffer, bytemuck::cast_slice(window));
        check_gl_error(gl, "bufferData");
    }

    /// Draw one axis as a line strip over the window passed to `begin_frame`.
    /// `values` must be a view into that same window.
    pub fn draw(&self, gl: &mut G, values: &StridedView<'_>, color: Rgba) {
        gl.attrib_pointer(self.sensor_value, &self.sample_buffer, values.stride(), values.offset());
        check_gl_error(gl, "glVertexAttribPointer");

        gl.uniform_color(&self.frag_color, color);
        check_gl_error(gl, "glUniform4f");

        gl.draw_line_strip(values.count().min(self.vertex_count));
        check_gl_error(gl, "glDrawArrays");
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

/// Compile both stages and link them. Shader objects never outlive this call.
fn create_program<G: GlBackend>(
    gl: &mut G,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<G::Program, SetupError> {
    let vertex = compile(gl, ShaderStage::Vertex, vertex_source)?;
    let fragment = match compile(gl, ShaderStage::Fragment, fragment_source) {
        Ok(shader) => shader,
        Err(err) => {
            gl.delete_shader(vertex);
            return Err(err);
        }
    };

    let linked = gl.link_program(&vertex, &fragment);
    gl.delete_shader(vertex);
    gl.delete_shader(fragment);

    linked.map_err(|log| {
        log::error!("Could not link program:\n{}", log);
        SetupError::ProgramLink(log)
    })
}

fn compile<G: GlBackend>(gl: &mut G, stage: ShaderStage, source: &str) -> Result<G::Shader, SetupError> {
    gl.compile_shader(stage, source).map_err(|log| {
        log::error!("Could not compile {} shader:\n{}", stage, log);
        SetupError::ShaderCompile { stage, log }
    })
}

fn resolve_bindings<G: GlBackend>(gl: &mut G, program: &G::Program) -> Result<Bindings<G>, SetupError> {
    let position_x = attrib(gl, program, POSITION_ATTRIBUTE)?;
    let sensor_value = attrib(gl, program, SENSOR_ATTRIBUTE)?;

    let frag_color = gl.uniform_location(program, COLOR_UNIFORM);
    check_gl_error(gl, "glGetUniformLocation");
    let frag_color = frag_color.ok_or(SetupError::MissingBinding(COLOR_UNIFORM))?;
    log::info!("glGetUniformLocation(\"{}\") resolved", COLOR_UNIFORM);

    let position_buffer = gl.create_buffer().ok_or(SetupError::BufferCreation)?;
    let Some(sample_buffer) = gl.create_buffer() else {
        gl.delete_buffer(position_buffer);
        return Err(SetupError::BufferCreation);
    };

    Ok(Bindings {
        position_x,
        sensor_value,
        frag_color,
        position_buffer,
        sample_buffer,
    })
}

fn attrib<G: GlBackend>(gl: &mut G, program: &G::Program, name: &'static str) -> Result<u32, SetupError> {
    let location = gl.attrib_location(program, name);
    check_gl_error(gl, "glGetAttribLocation");

    let location = location.ok_or(SetupError::MissingBinding(name))?;
    log::info!("glGetAttribLocation(\"{}\") = {}", name, location);
    Ok(location)
}
