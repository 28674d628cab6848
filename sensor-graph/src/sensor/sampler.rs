//! Sampler - drains pending sensor events once per frame
//!
//! Every call yields exactly one sample, however many raw events arrived
//! since the last frame (including none).

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::filter::Filter;
use super::sample::Sample;

/// Source of raw accelerometer readings
pub trait MotionSensor {
    /// Next pending reading in arrival order, or `None` when drained.
    /// Must never block.
    fn poll_event(&mut self) -> Option<Sample>;
}

/// Shared FIFO of raw readings
///
/// Event listeners push into one clone, the sampler drains another.
/// Single-threaded only.
#[derive(Clone, Default)]
pub struct SensorQueue(Rc<RefCell<VecDeque<Sample>>>);

impl SensorQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, sample: Sample) {
        self.0.borrow_mut().push_back(sample);
    }

    /// Number of readings not yet drained
    pub fn pending(&self) -> usize {
        self.0.borrow().len()
    }
}

impl MotionSensor for SensorQueue {
    fn poll_event(&mut self) -> Option<Sample> {
        self.0.borrow_mut().pop_front()
    }
}

/// Filters a sensor's event stream down to one sample per frame
pub struct Sampler<S> {
    sensor: S,
    filter: Filter,
}

impl<S: MotionSensor> Sampler<S> {
    pub fn new(sensor: S, filter: Filter) -> Self {
        Self { sensor, filter }
    }

    /// Fold every pending event through the filter and return its state.
    ///
    /// With nothing pending the previous filtered value comes back unchanged.
    pub fn sample(&mut self) -> Sample {
        while let Some(raw) = self.sensor.poll_event() {
            self.filter.update(raw);
        }
        self.filter.current()
    }

    /// Last filtered value without draining
    pub fn current(&self) -> Sample {
        self.filter.current()
    }
}
