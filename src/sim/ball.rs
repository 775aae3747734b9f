//! The ball: integrator state plus boundary clamping
//!
//! `BallPhysics` is the only stateful piece of the simulation. A driver feeds
//! it one acceleration sample at a time and reads the position back.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Contacts, resolve_boundaries};
use super::field::{Field, FieldError};
use super::integrator;

/// Whether the integrator has a previous acceleration sample to work from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IntegratorPhase {
    /// No baseline yet; the next sample only seeds `last_acc`
    #[default]
    Uninitialized,
    /// Baseline recorded, every sample advances the ball
    Tracking,
}

/// Observable ball state at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSnapshot {
    pub pos: Vec2,
    pub vel: Vec2,
    pub last_acc: Vec2,
    pub phase: IntegratorPhase,
}

/// A ball confined to a rectangular field
#[derive(Debug, Clone, PartialEq)]
pub struct BallPhysics {
    field: Field,
    pos: Vec2,
    vel: Vec2,
    /// Acceleration of the previous sample (`a0` of the next step)
    last_acc: Vec2,
    phase: IntegratorPhase,
}

impl BallPhysics {
    /// Create a ball centered in `field`, at rest, with no baseline sample
    pub fn new(field: Field) -> Self {
        let mut ball = Self {
            field,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            last_acc: Vec2::ZERO,
            phase: IntegratorPhase::Uninitialized,
        };
        ball.reset();
        ball
    }

    /// Validate raw dimensions and create a ball
    pub fn with_dimensions(
        field_width: f32,
        field_height: f32,
        ball_size: f32,
    ) -> Result<Self, FieldError> {
        Field::new(field_width, field_height, ball_size).map(Self::new)
    }

    /// Feed one acceleration sample covering `dt` seconds since the previous one.
    ///
    /// The first sample after construction or [`reset`](Self::reset) only
    /// records the baseline acceleration. Negative `dt` is treated as zero.
    /// Returns the edges touched during this step.
    pub fn integrate(&mut self, acc_x: f32, acc_y: f32, dt: f32) -> Contacts {
        let acc = Vec2::new(acc_x, acc_y);

        if self.phase == IntegratorPhase::Uninitialized {
            self.last_acc = acc;
            self.phase = IntegratorPhase::Tracking;
            return Contacts::none();
        }

        let dt = if dt < 0.0 {
            log::warn!("Negative dt {dt} treated as 0");
            0.0
        } else {
            dt
        };

        let result = integrator::step(self.pos, self.vel, self.last_acc, acc, dt);
        self.pos = result.pos;
        self.vel = result.vel;
        self.last_acc = acc;

        self.check_boundaries()
    }

    /// Clamp into the field, zeroing velocity and stored acceleration on contact axes
    fn check_boundaries(&mut self) -> Contacts {
        let contacts = resolve_boundaries(&mut self.pos, &mut self.vel, &mut self.last_acc, &self.field);
        for contact in contacts.iter() {
            log::debug!(
                "Collision: {} boundary (unclamped={})",
                contact.edge.as_str(),
                contact.unclamped
            );
        }
        contacts
    }

    /// Re-center the ball at rest and forget the baseline sample
    pub fn reset(&mut self) {
        self.pos = self.field.center();
        self.vel = Vec2::ZERO;
        self.last_acc = Vec2::ZERO;
        self.phase = IntegratorPhase::Uninitialized;
        log::debug!("Ball reset: position=({}, {})", self.pos.x, self.pos.y);
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    #[inline]
    pub fn last_acceleration(&self) -> Vec2 {
        self.last_acc
    }

    #[inline]
    pub fn phase(&self) -> IntegratorPhase {
        self.phase
    }

    #[inline]
    pub fn has_prior_sample(&self) -> bool {
        self.phase == IntegratorPhase::Tracking
    }

    #[inline]
    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn snapshot(&self) -> BallSnapshot {
        BallSnapshot {
            pos: self.pos,
            vel: self.vel,
            last_acc: self.last_acc,
            phase: self.phase,
        }
    }
}
