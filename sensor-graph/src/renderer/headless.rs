//! Recording GL backend for tests
//!
//! Performs a shallow syntax check on shader text, reads attribute and
//! uniform declarations to assign locations, and records every draw with the
//! values each bound attribute would have fed the GPU.

use std::collections::{BTreeMap, HashMap, VecDeque};

use super::backend::{GlBackend, GlInfo, Rgba, ShaderStage};

struct LinkedProgram {
    attributes: Vec<String>,
    uniforms: Vec<String>,
}

struct Binding {
    buffer: u32,
    stride: usize,
    offset: usize,
}

/// One recorded line-strip draw
#[derive(Debug, Clone)]
pub struct DrawRecord {
    pub count: usize,
    pub color: Option<Rgba>,
    attributes: Vec<(String, Vec<f32>)>,
}

impl DrawRecord {
    /// Values the named attribute supplied, one per vertex
    pub fn attribute(&self, name: &str) -> Option<&[f32]> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
    }
}

#[derive(Default)]
pub struct HeadlessGl {
    next_id: u32,
    shaders: HashMap<u32, (ShaderStage, String)>,
    programs: HashMap<u32, LinkedProgram>,
    buffers: HashMap<u32, Vec<u8>>,
    bindings: BTreeMap<u32, Binding>,
    current_program: Option<u32>,
    color: Option<Rgba>,
    viewport: Option<(i32, i32)>,
    clears: Vec<Rgba>,
    draws: Vec<DrawRecord>,
    pending_errors: VecDeque<u32>,
    link_failure: Option<String>,
    buffer_failure: Option<usize>,
    uploads: usize,
}

impl HeadlessGl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `link_program` fail with `log`
    pub fn fail_next_link(&mut self, log: &str) {
        self.link_failure = Some(log.to_string());
    }

    /// Make `create_buffer` fail once `n` more buffers have been created
    pub fn fail_buffer_after(&mut self, n: usize) {
        self.buffer_failure = Some(n);
    }

    /// Number of `upload` calls so far
    pub fn uploads(&self) -> usize {
        self.uploads
    }

    /// Queue an error code for `next_error`
    pub fn inject_error(&mut self, code: u32) {
        self.pending_errors.push_back(code);
    }

    pub fn pending_errors(&self) -> usize {
        self.pending_errors.len()
    }

    pub fn live_shaders(&self) -> usize {
        self.shaders.len()
    }

    pub fn live_programs(&self) -> usize {
        self.programs.len()
    }

    pub fn live_buffers(&self) -> usize {
        self.buffers.len()
    }

    pub fn viewport(&self) -> Option<(i32, i32)> {
        self.viewport
    }

    pub fn clears(&self) -> &[Rgba] {
        &self.clears
    }

    pub fn draws(&self) -> &[DrawRecord] {
        &self.draws
    }

    fn allocate(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn read_floats(&self, binding: &Binding, count: usize) -> Vec<f32> {
        let Some(bytes) = self.buffers.get(&binding.buffer) else {
            return Vec::new();
        };
        (0..count)
            .map(|i| binding.offset + i * binding.stride)
            .take_while(|at| at + 4 <= bytes.len())
            .map(|at| bytemuck::pod_read_unaligned(&bytes[at..at + 4]))
            .collect()
    }
}

fn strip_comments(source: &str) -> String {
    source
        .lines()
        .map(|line| line.split("//").next().unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\n")
}

fn check_syntax(source: &str) -> Result<(), String> {
    let mut depth: Vec<char> = Vec::new();
    for (line_no, line) in source.lines().enumerate() {
        for c in line.chars() {
            match c {
                '(' | '{' => depth.push(c),
                ')' | '}' => {
                    let open = if c == ')' { '(' } else { '{' };
                    if depth.pop() != Some(open) {
                        return Err(format!("ERROR: 0:{}: '{}' : syntax error", line_no + 1, c));
                    }
                }
                _ => {}
            }
        }
    }
    if let Some(open) = depth.pop() {
        return Err(format!("ERROR: unclosed '{}'", open));
    }
    if !source.contains("void main") {
        return Err("ERROR: missing main()".to_string());
    }
    Ok(())
}

/// Names declared as `<qualifier> [precision] <type> <name>;`
fn declarations(source: &str, qualifier: &str) -> Vec<String> {
    source
        .split(';')
        .filter_map(|statement| {
            let tokens: Vec<&str> = statement.split_whitespace().collect();
            match tokens.as_slice() {
                [first, _, .., name] if *first == qualifier => Some(name.to_string()),
                _ => None,
            }
        })
        .collect()
}

impl GlBackend for HeadlessGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type Uniform = u32;

    fn info(&self) -> GlInfo {
        GlInfo {
            version: "Headless GL".to_string(),
            vendor: "sensor-graph".to_string(),
            renderer: "recording".to_string(),
            extensions: String::new(),
        }
    }

    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<u32, String> {
        let source = strip_comments(source);
        check_syntax(&source)?;
        let id = self.allocate();
        self.shaders.insert(id, (stage, source));
        Ok(id)
    }

    fn link_program(&mut self, vertex: &u32, fragment: &u32) -> Result<u32, String> {
        if let Some(log) = self.link_failure.take() {
            return Err(log);
        }

        let (Some((ShaderStage::Vertex, vs)), Some((ShaderStage::Fragment, fs))) =
            (self.shaders.get(vertex), self.shaders.get(fragment))
        else {
            return Err("ERROR: program needs one vertex and one fragment shader".to_string());
        };

        let attributes = declarations(vs, "attribute");
        let mut uniforms = declarations(vs, "uniform");
        uniforms.extend(declarations(fs, "uniform"));

        let id = self.allocate();
        self.programs.insert(id, LinkedProgram { attributes, uniforms });
        Ok(id)
    }

    fn delete_shader(&mut self, shader: u32) {
        self.shaders.remove(&shader);
    }

    fn delete_program(&mut self, program: u32) {
        self.programs.remove(&program);
        if self.current_program == Some(program) {
            self.current_program = None;
        }
    }

    fn attrib_location(&mut self, program: &u32, name: &str) -> Option<u32> {
        let program = self.programs.get(program)?;
        let index = program.attributes.iter().position(|a| a == name)?;
        u32::try_from(index).ok()
    }

    fn uniform_location(&mut self, program: &u32, name: &str) -> Option<u32> {
        let program = self.programs.get(program)?;
        let index = program.uniforms.iter().position(|u| u == name)?;
        u32::try_from(index).ok()
    }

    fn create_buffer(&mut self) -> Option<u32> {
        match self.buffer_failure {
            Some(0) => {
                self.buffer_failure = None;
                return None;
            }
            Some(n) => self.buffer_failure = Some(n - 1),
            None => {}
        }
        let id = self.allocate();
        self.buffers.insert(id, Vec::new());
        Some(id)
    }

    fn delete_buffer(&mut self, buffer: u32) {
        self.buffers.remove(&buffer);
    }

    fn upload(&mut self, buffer: &u32, bytes: &[u8]) {
        self.uploads += 1;
        if let Some(data) = self.buffers.get_mut(buffer) {
            *data = bytes.to_vec();
        }
    }

    fn viewport(&mut self, width: i32, height: i32) {
        self.viewport = Some((width, height));
    }

    fn clear(&mut self, color: Rgba) {
        self.clears.push(color);
    }

    fn use_program(&mut self, program: &u32) {
        self.current_program = Some(*program);
    }

    fn attrib_pointer(&mut self, location: u32, buffer: &u32, stride: usize, offset: usize) {
        self.bindings.insert(location, Binding { buffer: *buffer, stride, offset });
    }

    fn uniform_color(&mut self, _uniform: &u32, color: Rgba) {
        self.color = Some(color);
    }

    fn draw_line_strip(&mut self, count: usize) {
        let attributes = match self.current_program.and_then(|id| self.programs.get(&id)) {
            Some(program) => self
                .bindings
                .iter()
                .filter_map(|(location, binding)| {
                    let name = program.attributes.get(*location as usize)?;
                    Some((name.clone(), self.read_floats(binding, count)))
                })
                .collect(),
            None => Vec::new(),
        };

        self.draws.push(DrawRecord {
            count,
            color: self.color,
            attributes,
        });
    }

    fn next_error(&mut self) -> Option<u32> {
        self.pending_errors.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declarations_skip_precision() {
        let src = "precision mediump float;\nuniform vec4 uFragColor;\nuniform highp float uScale;";
        assert_eq!(declarations(src, "uniform"), vec!["uFragColor", "uScale"]);
    }

    #[test]
    fn test_syntax_check() {
        assert!(check_syntax("void main() { x = f(1.0); }").is_ok());
        assert!(check_syntax("void main() { x = f(1.0; }").is_err());
        assert!(check_syntax("float f() { return 1.0; }").is_err());
    }
}
