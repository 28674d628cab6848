//! SensorGraph - the one context object behind `init` and `step`
//!
//! Owns the GL backend, the sampler, the history and the pipeline. It can
//! only be obtained from a successful `init`, so a value of this type is
//! always ready to step.

use crate::config::{GraphConfig, SENSOR_HISTORY_LENGTH};
use crate::error::SetupError;
use crate::history::{HistoryBuffer, PositionTable};
use crate::renderer::{check_gl_error, GlBackend, RenderPipeline, Rgba, ShaderSources, AXIS_COLORS};
use crate::sensor::{Filter, MotionSensor, Sample, Sampler};

/// Lifecycle after setup. Failed setups never produce a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Built, not stepped yet
    Initialized,
    /// At least one frame drawn
    Running,
}

pub struct SensorGraph<G: GlBackend, S: MotionSensor, const N: usize = SENSOR_HISTORY_LENGTH> {
    gl: G,
    pipeline: RenderPipeline<G>,
    sampler: Sampler<S>,
    history: HistoryBuffer<N>,
    clear_color: Rgba,
    phase: Phase,
}

impl<G: GlBackend, S: MotionSensor, const N: usize> SensorGraph<G, S, N> {
    /// One-time setup: pipeline, position table, viewport.
    ///
    /// On `Err` nothing GPU-side is left alive and there is nothing to step.
    pub fn init(
        mut gl: G,
        sensor: S,
        shaders: &ShaderSources,
        config: &GraphConfig,
        width: i32,
        height: i32,
    ) -> Result<Self, SetupError> {
        let info = gl.info();
        log::info!("GL Version = {}", info.version);
        log::info!("GL Vendor = {}", info.vendor);
        log::info!("GL Renderer = {}", info.renderer);
        log::debug!("GL Extensions = {}", info.extensions);
        log::info!("setupGraphics({}, {})", width, height);

        let positions = PositionTable::<N>::new();
        let pipeline = RenderPipeline::initialize(&mut gl, shaders, positions.as_slice())?;

        gl.viewport(width, height);
        check_gl_error(&mut gl, "glViewport");

        Ok(Self {
            gl,
            pipeline,
            sampler: Sampler::new(sensor, Filter::new(config.filter_alpha)),
            history: HistoryBuffer::new(),
            clear_color: config.clear_color,
            phase: Phase::Initialized,
        })
    }

    /// Advance one frame: sample, append, draw x, y, z
    pub fn step(&mut self) {
        let sample = self.sampler.sample();
        self.history.append(sample);
        self.render();
        self.phase = Phase::Running;
    }

    fn render(&mut self) {
        self.pipeline.begin_frame(&mut self.gl, self.clear_color, self.history.window());

        for (axis, color) in AXIS_COLORS {
            match self.history.axis_view(axis) {
                Ok(view) => self.pipeline.draw(&mut self.gl, &view, color),
                Err(e) => log::warn!("skipping {:?} axis: {}", axis, e),
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current filtered value
    pub fn filtered(&self) -> Sample {
        self.sampler.current()
    }

    pub fn history(&self) -> &HistoryBuffer<N> {
        &self.history
    }

    pub fn backend(&self) -> &G {
        &self.gl
    }

    pub fn backend_mut(&mut self) -> &mut G {
        &mut self.gl
    }
}
