//! WebGL backend - canvas lookup, context creation, GL calls

use wasm_bindgen::JsCast;
use web_sys::{
    WebGlBuffer, WebGlProgram, WebGlRenderingContext as Gl, WebGlShader, WebGlUniformLocation,
    Window,
};

use super::backend::{GlBackend, GlInfo, Rgba, ShaderStage};
use crate::error::SetupError;

/// WebGL 1 context bound to one canvas
pub struct WebGl {
    gl: Gl,
}

impl WebGl {
    /// Acquire the `webgl` context of the canvas with id `canvas_id`
    pub fn from_canvas(window: &Window, canvas_id: &str) -> Result<Self, SetupError> {
        let document = window.document().ok_or(SetupError::NoDocument)?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| SetupError::NoCanvas(canvas_id.to_string()))?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|_| SetupError::NoCanvas(canvas_id.to_string()))?;

        let gl = canvas
            .get_context("webgl")
            .map_err(|e| SetupError::ContextCreation(format!("{:?}", e)))?
            .ok_or_else(|| SetupError::ContextCreation("webgl unsupported".to_string()))?
            .dyn_into::<Gl>()
            .map_err(|_| SetupError::ContextCreation("not a WebGlRenderingContext".to_string()))?;

        Ok(Self { gl })
    }

    fn string_parameter(&self, pname: u32) -> String {
        self.gl
            .get_parameter(pname)
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    }
}

impl GlBackend for WebGl {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type Uniform = WebGlUniformLocation;

    fn info(&self) -> GlInfo {
        let extensions = self
            .gl
            .get_supported_extensions()
            .map(|list| String::from(list.join(" ")))
            .unwrap_or_default();

        GlInfo {
            version: self.string_parameter(Gl::VERSION),
            vendor: self.string_parameter(Gl::VENDOR),
            renderer: self.string_parameter(Gl::RENDERER),
            extensions,
        }
    }

    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<WebGlShader, String> {
        let kind = match stage {
            ShaderStage::Vertex => Gl::VERTEX_SHADER,
            ShaderStage::Fragment => Gl::FRAGMENT_SHADER,
        };
        let shader = self
            .gl
            .create_shader(kind)
            .ok_or_else(|| "unable to create shader object".to_string())?;

        self.gl.shader_source(&shader, source);
        self.gl.compile_shader(&shader);

        let compiled = self
            .gl
            .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false);
        if compiled {
            return Ok(shader);
        }

        let log = self.gl.get_shader_info_log(&shader).unwrap_or_default();
        self.gl.delete_shader(Some(&shader));
        Err(log)
    }

    fn link_program(&mut self, vertex: &WebGlShader, fragment: &WebGlShader) -> Result<WebGlProgram, String> {
        let program = self
            .gl
            .create_program()
            .ok_or_else(|| "unable to create program object".to_string())?;

        self.gl.attach_shader(&program, vertex);
        self.gl.attach_shader(&program, fragment);
        self.gl.link_program(&program);

        let linked = self
            .gl
            .get_program_parameter(&program, Gl::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        if linked {
            return Ok(program);
        }

        let log = self.gl.get_program_info_log(&program).unwrap_or_default();
        self.gl.delete_program(Some(&program));
        Err(log)
    }

    fn delete_shader(&mut self, shader: WebGlShader) {
        self.gl.delete_shader(Some(&shader));
    }

    fn delete_program(&mut self, program: WebGlProgram) {
        self.gl.delete_program(Some(&program));
    }

    fn attrib_location(&mut self, program: &WebGlProgram, name: &str) -> Option<u32> {
        u32::try_from(self.gl.get_attrib_location(program, name)).ok()
    }

    fn uniform_location(&mut self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.gl.get_uniform_location(program, name)
    }

    fn create_buffer(&mut self) -> Option<WebGlBuffer> {
        self.gl.create_buffer()
    }

    fn delete_buffer(&mut self, buffer: WebGlBuffer) {
        self.gl.delete_buffer(Some(&buffer));
    }

    fn upload(&mut self, buffer: &WebGlBuffer, bytes: &[u8]) {
        self.gl.bind_buffer(Gl::ARRAY_BUFFER, Some(buffer));
        self.gl.buffer_data_with_u8_array(Gl::ARRAY_BUFFER, bytes, Gl::DYNAMIC_DRAW);
    }

    fn viewport(&mut self, width: i32, height: i32) {
        self.gl.viewport(0, 0, width, height);
    }

    fn clear(&mut self, color: Rgba) {
        let [r, g, b, a] = color;
        self.gl.clear_color(r, g, b, a);
        self.gl.clear(Gl::DEPTH_BUFFER_BIT | Gl::COLOR_BUFFER_BIT);
    }

    fn use_program(&mut self, program: &WebGlProgram) {
        self.gl.use_program(Some(program));
    }

    fn attrib_pointer(&mut self, location: u32, buffer: &WebGlBuffer, stride: usize, offset: usize) {
        self.gl.bind_buffer(Gl::ARRAY_BUFFER, Some(buffer));
        self.gl.enable_vertex_attrib_array(location);
        self.gl
            .vertex_attrib_pointer_with_i32(location, 1, Gl::FLOAT, false, stride as i32, offset as i32);
    }

    fn uniform_color(&mut self, uniform: &WebGlUniformLocation, color: Rgba) {
        let [r, g, b, a] = color;
        self.gl.uniform4f(Some(uniform), r, g, b, a);
    }

    fn draw_line_strip(&mut self, count: usize) {
        self.gl.draw_arrays(Gl::LINE_STRIP, 0, count as i32);
    }

    fn next_error(&mut self) -> Option<u32> {
        match self.gl.get_error() {
            Gl::NO_ERROR => None,
            code => Some(code),
        }
    }
}
