//! Sensor module - motion readings, smoothing, per-frame sampling
//!
//! Re-exports only. All logic in submodules.

mod sample;
mod filter;
mod sampler;
mod device_motion;

pub use sample::{Sample, Axis};
pub use filter::Filter;
pub use sampler::{MotionSensor, SensorQueue, Sampler};
pub use device_motion::DeviceMotionSensor;
