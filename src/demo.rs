//! Synthetic tilt source
//!
//! Stands in for a real gravity sensor when driving a session headless.
//! The device slowly wobbles around a tilt direction that precesses over
//! time, with seeded jitter so runs are reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::STANDARD_GRAVITY;
use crate::sensor::SensorSample;

/// Maximum tilt from flat (radians)
const MAX_TILT: f32 = 0.6;
/// Precession speed of the tilt direction (radians/sec)
const PRECESSION_RATE: f32 = 0.35;
/// Wobble frequency of the tilt magnitude (Hz)
const WOBBLE_HZ: f32 = 0.2;
/// Sensor noise amplitude (m/s²)
const JITTER: f32 = 0.05;

/// Deterministic stream of gravity-sensor samples
#[derive(Debug, Clone)]
pub struct TiltScript {
    seed: u64,
    rng: Pcg32,
    period_ns: i64,
    index: u64,
}

impl TiltScript {
    pub fn new(seed: u64, sample_rate_hz: f32) -> Self {
        let rate = if sample_rate_hz.is_finite() && sample_rate_hz > 0.0 {
            sample_rate_hz
        } else {
            log::warn!("Invalid sample rate {sample_rate_hz}, using 60 Hz");
            60.0
        };

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            period_ns: (1.0e9 / rate as f64).round() as i64,
            index: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Nanoseconds between samples
    pub fn period_ns(&self) -> i64 {
        self.period_ns
    }

    /// Noise-free gravity vector at time `t` seconds
    pub fn gravity_at(t: f32) -> [f32; 3] {
        let tilt = MAX_TILT * (0.5 + 0.5 * (std::f32::consts::TAU * WOBBLE_HZ * t).sin());
        let heading = PRECESSION_RATE * t;
        let planar = STANDARD_GRAVITY * tilt.sin();
        [
            planar * heading.cos(),
            planar * heading.sin(),
            STANDARD_GRAVITY * tilt.cos(),
        ]
    }

    /// Produce the next sample
    pub fn next_sample(&mut self) -> SensorSample {
        let timestamp_ns = self.index as i64 * self.period_ns;
        let t = timestamp_ns as f32 * crate::consts::NS_TO_S;
        self.index += 1;

        let mut values = Self::gravity_at(t);
        for v in values.iter_mut().take(2) {
            *v += self.rng.random_range(-JITTER..=JITTER);
        }

        SensorSample::new(values, timestamp_ns)
    }
}

impl Iterator for TiltScript {
    type Item = SensorSample;

    fn next(&mut self) -> Option<SensorSample> {
        Some(self.next_sample())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let a: Vec<_> = TiltScript::new(42, 60.0).take(100).collect();
        let b: Vec<_> = TiltScript::new(42, 60.0).take(100).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_changes_jitter() {
        let a: Vec<_> = TiltScript::new(1, 60.0).take(10).collect();
        let b: Vec<_> = TiltScript::new(2, 60.0).take(10).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_timestamps_advance_at_rate() {
        let samples: Vec<_> = TiltScript::new(7, 50.0).take(4).collect();
        let stamps: Vec<i64> = samples.iter().map(|s| s.timestamp_ns).collect();
        assert_eq!(stamps, vec![0, 20_000_000, 40_000_000, 60_000_000]);
    }

    #[test]
    fn test_gravity_magnitude() {
        for i in 0..50 {
            let g = TiltScript::gravity_at(i as f32 * 0.37);
            let mag = (g[0] * g[0] + g[1] * g[1] + g[2] * g[2]).sqrt();
            assert!((mag - STANDARD_GRAVITY).abs() < 1e-3, "magnitude {mag}");
            assert!(g[2] > 0.0);
        }
    }

    #[test]
    fn test_invalid_rate_falls_back() {
        let script = TiltScript::new(0, 0.0);
        assert_eq!(script.period_ns(), 16_666_667);
    }
}
