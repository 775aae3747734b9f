//! Sensor input: raw samples, acceleration mapping, timing
//!
//! The physics never sees raw sensor vectors. A [`SensorMapping`] converts
//! the device gravity reading into field acceleration, and a [`SampleClock`]
//! turns event timestamps into elapsed seconds.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{NS_TO_S, SENSOR_SCALE};

/// A raw gravity-sensor event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorSample {
    /// Gravity vector in device coordinates (m/s²)
    pub values: [f32; 3],
    /// Event time (nanoseconds, monotonic)
    pub timestamp_ns: i64,
}

impl SensorSample {
    pub fn new(values: [f32; 3], timestamp_ns: i64) -> Self {
        Self {
            values,
            timestamp_ns,
        }
    }
}

/// Converts a raw sensor vector into field acceleration (units/s²)
pub trait SensorMapping {
    fn to_acceleration(&self, values: &[f32; 3]) -> Vec2;
}

impl<F> SensorMapping for F
where
    F: Fn(&[f32; 3]) -> Vec2,
{
    fn to_acceleration(&self, values: &[f32; 3]) -> Vec2 {
        self(values)
    }
}

/// Scaled gravity mapping with per-axis sign flips
///
/// Defaults assume a portrait screen with y pointing down: device X is
/// inverted, device Y is used as is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravityMapping {
    pub scale: f32,
    pub invert_x: bool,
    pub invert_y: bool,
}

impl Default for GravityMapping {
    fn default() -> Self {
        Self {
            scale: SENSOR_SCALE,
            invert_x: true,
            invert_y: false,
        }
    }
}

impl SensorMapping for GravityMapping {
    fn to_acceleration(&self, values: &[f32; 3]) -> Vec2 {
        let sign = |invert: bool| -> f32 { if invert { -1.0 } else { 1.0 } };
        Vec2::new(
            sign(self.invert_x) * values[0] * self.scale,
            sign(self.invert_y) * values[1] * self.scale,
        )
    }
}

/// Converts monotonic event timestamps into `dt` seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleClock {
    last_ns: Option<i64>,
}

impl SampleClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a timestamp and return seconds since the previous one.
    ///
    /// The first timestamp only seeds the clock and returns `None`.
    /// Timestamps that do not move forward yield `Some(0.0)`.
    pub fn tick(&mut self, timestamp_ns: i64) -> Option<f32> {
        let dt = self.last_ns.map(|last| {
            let delta = timestamp_ns.saturating_sub(last);
            if delta <= 0 {
                log::warn!("Sensor timestamp did not advance ({last} -> {timestamp_ns})");
                0.0
            } else {
                delta as f32 * NS_TO_S
            }
        });
        self.last_ns = Some(timestamp_ns);
        dt
    }

    /// Forget the last timestamp; the next `tick` seeds again
    pub fn reset(&mut self) {
        self.last_ns = None;
    }

    pub fn is_seeded(&self) -> bool {
        self.last_ns.is_some()
    }
}
