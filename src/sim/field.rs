//! Field geometry
//!
//! The rectangle the ball lives in, plus the ball's bounding-box size.
//! Positions refer to the ball's top-left corner, so the reachable range on
//! each axis is `[0, extent - ball_size]`.

use std::fmt;

use glam::Vec2;

/// Reasons a field cannot be constructed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldError {
    /// Width or height is zero, negative, or not finite
    InvalidDimension { width: f32, height: f32 },
    /// Ball size is zero, negative, or not finite
    InvalidBallSize(f32),
    /// Ball does not fit inside the field
    BallTooLarge { ball_size: f32, max: f32 },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidDimension { width, height } => {
                write!(f, "field dimensions must be positive, got {width}x{height}")
            }
            FieldError::InvalidBallSize(size) => {
                write!(f, "ball size must be positive, got {size}")
            }
            FieldError::BallTooLarge { ball_size, max } => {
                write!(f, "ball size {ball_size} exceeds smallest field extent {max}")
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Validated field dimensions and ball size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    width: f32,
    height: f32,
    ball_size: f32,
}

impl Field {
    /// Validate and build a field.
    ///
    /// Requires `width > 0`, `height > 0` and `0 < ball_size <= min(width, height)`.
    pub fn new(width: f32, height: f32, ball_size: f32) -> Result<Self, FieldError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;

        if !positive(width) || !positive(height) {
            return Err(FieldError::InvalidDimension { width, height });
        }
        if !positive(ball_size) {
            return Err(FieldError::InvalidBallSize(ball_size));
        }
        let max = width.min(height);
        if ball_size > max {
            return Err(FieldError::BallTooLarge { ball_size, max });
        }

        Ok(Self {
            width,
            height,
            ball_size,
        })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn ball_size(&self) -> f32 {
        self.ball_size
    }

    /// Largest legal position on each axis
    #[inline]
    pub fn max_position(&self) -> Vec2 {
        Vec2::new(self.width - self.ball_size, self.height - self.ball_size)
    }

    /// Position that centers the ball in the field
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.max_position() / 2.0
    }

    /// Whether a position satisfies `0 <= p <= max_position()` on both axes
    pub fn contains(&self, pos: Vec2) -> bool {
        let max = self.max_position();
        pos.x >= 0.0 && pos.y >= 0.0 && pos.x <= max.x && pos.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let field = Field::new(300.0, 300.0, 50.0).unwrap();
        assert_eq!(field.center(), Vec2::new(125.0, 125.0));
        assert_eq!(field.max_position(), Vec2::new(250.0, 250.0));
    }

    #[test]
    fn test_non_square_center() {
        let field = Field::new(400.0, 200.0, 20.0).unwrap();
        assert_eq!(field.center(), Vec2::new(190.0, 90.0));
    }

    #[test]
    fn test_ball_filling_field_is_legal() {
        let field = Field::new(50.0, 80.0, 50.0).unwrap();
        assert_eq!(field.max_position(), Vec2::new(0.0, 30.0));
        assert!(field.contains(Vec2::new(0.0, 30.0)));
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert!(matches!(
            Field::new(0.0, 100.0, 10.0),
            Err(FieldError::InvalidDimension { .. })
        ));
        assert!(matches!(
            Field::new(100.0, -1.0, 10.0),
            Err(FieldError::InvalidDimension { .. })
        ));
        assert!(matches!(
            Field::new(f32::NAN, 100.0, 10.0),
            Err(FieldError::InvalidDimension { .. })
        ));
        assert!(matches!(
            Field::new(f32::INFINITY, 100.0, 10.0),
            Err(FieldError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_ball_size() {
        assert_eq!(
            Field::new(100.0, 100.0, 0.0),
            Err(FieldError::InvalidBallSize(0.0))
        );
        assert_eq!(
            Field::new(100.0, 60.0, 70.0),
            Err(FieldError::BallTooLarge {
                ball_size: 70.0,
                max: 60.0
            })
        );
    }

    #[test]
    fn test_contains() {
        let field = Field::new(300.0, 300.0, 50.0).unwrap();
        assert!(field.contains(Vec2::ZERO));
        assert!(field.contains(Vec2::new(250.0, 250.0)));
        assert!(!field.contains(Vec2::new(-0.1, 10.0)));
        assert!(!field.contains(Vec2::new(10.0, 250.1)));
    }

    #[test]
    fn test_error_display() {
        let err = Field::new(100.0, 60.0, 70.0).unwrap_err();
        assert_eq!(err.to_string(), "ball size 70 exceeds smallest field extent 60");
    }
}
