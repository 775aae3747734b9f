//! Ball simulation module
//!
//! Pure physics, no platform dependencies:
//! - Acceleration arrives as discrete samples with their elapsed time
//! - One ball, one fixed rectangular field
//! - Inelastic clamping at the edges

pub mod ball;
pub mod collision;
pub mod field;
pub mod integrator;

pub use ball::{BallPhysics, BallSnapshot, IntegratorPhase};
pub use collision::{Contact, Contacts, Edge, resolve_boundaries};
pub use field::{Field, FieldError};
pub use integrator::{StepResult, step};
