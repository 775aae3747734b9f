//! Play session driver
//!
//! Owns at most one ball. The field size is only known once the host has
//! laid out its surface, so the session starts `Unsized` and becomes
//! `Active` on the first successful [`BallSession::init_field`]. After every
//! accepted sensor sample the ball position is published to subscribers.

use glam::Vec2;

use crate::sensor::{GravityMapping, SampleClock, SensorMapping, SensorSample};
use crate::sim::{BallPhysics, Contacts, Field, FieldError};

/// Lifecycle of the session's ball
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Field dimensions not known yet; sensor samples are dropped
    Unsized,
    /// Ball exists and is being driven
    Active(BallPhysics),
}

/// Callback receiving every published position
pub type PositionObserver = Box<dyn FnMut(Vec2)>;

/// Drives one ball from raw sensor samples
pub struct BallSession<M: SensorMapping = GravityMapping> {
    state: SessionState,
    mapping: M,
    clock: SampleClock,
    published: Option<Vec2>,
    last_contacts: Contacts,
    observers: Vec<PositionObserver>,
}

impl Default for BallSession<GravityMapping> {
    fn default() -> Self {
        Self::new(GravityMapping::default())
    }
}

impl<M: SensorMapping> BallSession<M> {
    pub fn new(mapping: M) -> Self {
        Self {
            state: SessionState::Unsized,
            mapping,
            clock: SampleClock::new(),
            published: None,
            last_contacts: Contacts::none(),
            observers: Vec::new(),
        }
    }

    /// Size the field and create the ball. Only the first successful call has
    /// any effect; returns the current published position.
    pub fn init_field(
        &mut self,
        field_width: f32,
        field_height: f32,
        ball_size: f32,
    ) -> Result<Vec2, FieldError> {
        if let SessionState::Active(ball) = &self.state {
            log::debug!(
                "init_field({field_width}, {field_height}, {ball_size}) ignored, session already active"
            );
            return Ok(ball.position());
        }

        let field = Field::new(field_width, field_height, ball_size)?;
        log::info!("Field sized: {field_width}x{field_height}, ball size {ball_size}");
        let ball = BallPhysics::new(field);
        let pos = ball.position();
        self.state = SessionState::Active(ball);
        self.publish(pos);
        Ok(pos)
    }

    /// Feed one raw sensor event. Returns the newly published position, or
    /// `None` when the sample was only used to seed timing (or no field yet).
    pub fn on_sensor_sample(&mut self, sample: &SensorSample) -> Option<Vec2> {
        let SessionState::Active(ball) = &mut self.state else {
            return None;
        };

        let dt = self.clock.tick(sample.timestamp_ns)?;
        let acc = self.mapping.to_acceleration(&sample.values);
        self.last_contacts = ball.integrate(acc.x, acc.y, dt);
        let pos = ball.position();

        self.publish(pos);
        Some(pos)
    }

    /// Re-center the ball and restart timing
    pub fn reset(&mut self) {
        log::info!("Session reset");
        self.clock.reset();
        self.last_contacts = Contacts::none();
        if let SessionState::Active(ball) = &mut self.state {
            ball.reset();
            let pos = ball.position();
            self.publish(pos);
        }
    }

    /// Register a callback for every published position
    pub fn subscribe(&mut self, observer: impl FnMut(Vec2) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn publish(&mut self, pos: Vec2) {
        self.published = Some(pos);
        for observer in &mut self.observers {
            observer(pos);
        }
    }

    /// Last published position (`None` until the field is sized)
    pub fn position(&self) -> Option<Vec2> {
        self.published
    }

    /// Contacts from the most recent integration step
    pub fn last_contacts(&self) -> Contacts {
        self.last_contacts
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn ball(&self) -> Option<&BallPhysics> {
        match &self.state {
            SessionState::Active(ball) => Some(ball),
            SessionState::Unsized => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active(_))
    }

    pub fn mapping(&self) -> &M {
        &self.mapping
    }
}
