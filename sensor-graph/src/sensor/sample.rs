//! Sample - one accelerometer reading across the three axes

use bytemuck::{Pod, Zeroable};
use std::mem::offset_of;

/// One reading per axis at one instant.
///
/// `#[repr(C)]` so the history window can be handed to the GPU as-is and
/// read back per axis through a strided view.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Sample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Sample {
    pub const ZERO: Sample = Sample::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Value of a single axis
    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

/// Sensor axis, one plotted line each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Draw order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Byte offset of this axis' field inside a `Sample`
    pub const fn field_offset(self) -> usize {
        match self {
            Axis::X => offset_of!(Sample, x),
            Axis::Y => offset_of!(Sample, y),
            Axis::Z => offset_of!(Sample, z),
        }
    }
}
