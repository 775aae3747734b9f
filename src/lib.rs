//! Tilt Ball - a ball rolling around a rectangular field under sensor gravity
//!
//! Core modules:
//! - `sim`: Ball physics (integrator, boundary resolution, field geometry)
//! - `sensor`: Raw sensor samples, acceleration mapping, sample clock
//! - `session`: Driver that owns one ball and publishes its position
//! - `settings`: JSON-backed configuration
//! - `demo`: Deterministic synthetic tilt source

pub mod demo;
pub mod sensor;
pub mod session;
pub mod settings;
pub mod sim;

pub use demo::TiltScript;
pub use sensor::{GravityMapping, SampleClock, SensorMapping, SensorSample};
pub use session::{BallSession, SessionState};
pub use settings::Settings;
pub use sim::{BallPhysics, Contacts, Edge, Field, FieldError, IntegratorPhase};

/// Default configuration constants
pub mod consts {
    /// Field dimensions used when no settings file is present (pixels)
    pub const DEFAULT_FIELD_WIDTH: f32 = 1080.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 1920.0;
    /// Ball diameter (pixels)
    pub const DEFAULT_BALL_SIZE: f32 = 50.0;

    /// Multiplier from m/s² gravity readings to field units/s²
    pub const SENSOR_SCALE: f32 = 50.0;
    /// Nanoseconds to seconds
    pub const NS_TO_S: f32 = 1.0 / 1_000_000_000.0;

    /// Synthetic sensor delivery rate
    pub const DEFAULT_SAMPLE_RATE_HZ: f32 = 60.0;
    /// Standard gravity (m/s²)
    pub const STANDARD_GRAVITY: f32 = 9.81;
}
