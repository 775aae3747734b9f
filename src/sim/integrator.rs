//! Single-step integrator for sampled acceleration
//!
//! Acceleration is not a function we can evaluate; it arrives as a stream of
//! samples. Each step therefore sees two samples, `a0` (previous) and `a1`
//! (current), and the velocity at the start of the interval:
//!
//! ```text
//! v1 = v0 + 0.5*(a0 + a1)*dt
//! d  = v0*dt + (1/6)*dt²*(3*a0 + a1)
//! ```
//!
//! The displacement weights the starting acceleration 3:1 against the new
//! one. Replacing it with `0.5*(v0 + v1)*dt` changes trajectories.

use glam::Vec2;

/// Position and velocity after one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Advance `pos`/`vel` over `dt` given the acceleration samples bracketing the interval.
#[inline]
pub fn step(pos: Vec2, vel: Vec2, a0: Vec2, a1: Vec2, dt: f32) -> StepResult {
    let new_vel = vel + 0.5 * (a0 + a1) * dt;
    let displacement = vel * dt + (1.0 / 6.0) * dt * dt * (3.0 * a0 + a1);

    StepResult {
        pos: pos + displacement,
        vel: new_vel,
    }
}
