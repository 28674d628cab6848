//! Browser accelerometer via the `devicemotion` event
//!
//! The listener pushes readings into a `SensorQueue`; the sampler drains it
//! on the next frame. `devicemotion` has no rate control, so readings that
//! arrive faster than the target rate are dropped at the listener.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DeviceMotionEvent, Window};

use super::sample::Sample;
use super::sampler::{MotionSensor, SensorQueue};
use crate::error::SetupError;

const EVENT_NAME: &str = "devicemotion";

/// Device accelerometer (gravity included, m/s²)
pub struct DeviceMotionSensor {
    window: Window,
    queue: SensorQueue,
    listener: Closure<dyn FnMut(DeviceMotionEvent)>,
}

impl DeviceMotionSensor {
    /// Register the event listener and start queueing readings at `rate_hz`
    pub fn open(window: &Window, rate_hz: u32) -> Result<Self, SetupError> {
        let supported = js_sys::Reflect::has(window, &JsValue::from_str("DeviceMotionEvent"))
            .unwrap_or(false);
        if !supported {
            return Err(SetupError::SensorUnavailable);
        }

        let queue = SensorQueue::new();
        let sink = queue.clone();
        let min_interval_ms = 1000.0 / f64::from(rate_hz.max(1));
        let mut last_accepted_ms: Option<f64> = None;

        let listener = Closure::<dyn FnMut(DeviceMotionEvent)>::new(move |event: DeviceMotionEvent| {
            let Some(accel) = event.acceleration_including_gravity() else {
                return;
            };

            let Some(sample) = reading(accel.x(), accel.y(), accel.z()) else {
                return;
            };

            let now = event.time_stamp();
            if let Some(prev) = last_accepted_ms {
                if now - prev < min_interval_ms {
                    return;
                }
            }
            last_accepted_ms = Some(now);

            sink.push(sample);
        });

        window
            .add_event_listener_with_callback(EVENT_NAME, listener.as_ref().unchecked_ref())
            .map_err(|e| SetupError::SensorListener(format!("{:?}", e)))?;

        log::info!("{} sensor enabled at {} Hz", EVENT_NAME, rate_hz);

        Ok(Self {
            window: window.clone(),
            queue,
            listener,
        })
    }
}

/// Full three-axis reading, or `None` if the browser left any axis null
fn reading(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Option<Sample> {
    let (Some(x), Some(y), Some(z)) = (x, y, z) else {
        return None;
    };
    Some(Sample::new(x as f32, y as f32, z as f32))
}

impl MotionSensor for DeviceMotionSensor {
    fn poll_event(&mut self) -> Option<Sample> {
        self.queue.poll_event()
    }
}

impl Drop for DeviceMotionSensor {
    fn drop(&mut self) {
        let removed = self
            .window
            .remove_event_listener_with_callback(EVENT_NAME, self.listener.as_ref().unchecked_ref());
        if removed.is_err() {
            log::warn!("failed to unregister {} listener", EVENT_NAME);
        }
    }
}
