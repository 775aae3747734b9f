//! Boundary resolution against the field edges
//!
//! Contact is inelastic: the ball is clamped onto the edge and both the
//! velocity and the stored acceleration on that axis are zeroed. Zeroing the
//! acceleration keeps the next step from pushing back into the wall with the
//! pre-contact sample as `a0`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::field::Field;

/// A field edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    /// x = 0
    Left,
    /// x = width - ball_size
    Right,
    /// y = 0
    Top,
    /// y = height - ball_size
    Bottom,
}

impl Edge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Edge::Left => "left",
            Edge::Right => "right",
            Edge::Top => "top",
            Edge::Bottom => "bottom",
        }
    }
}

/// A single edge contact
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub edge: Edge,
    /// Coordinate on the contact axis before clamping
    pub unclamped: f32,
}

/// Contacts produced by one resolution pass (at most one per axis)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Contacts {
    pub x: Option<Contact>,
    pub y: Option<Contact>,
}

impl Contacts {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }

    /// Both axes touched an edge (corner contact)
    pub fn is_corner(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = Contact> + '_ {
        self.x.iter().chain(self.y.iter()).copied()
    }

    pub fn touches(&self, edge: Edge) -> bool {
        self.iter().any(|c| c.edge == edge)
    }
}

/// Clamp one axis. Returns the contacted edge, if any.
fn resolve_axis(
    pos: &mut f32,
    vel: &mut f32,
    acc: &mut f32,
    extent: f32,
    ball_size: f32,
    low: Edge,
    high: Edge,
) -> Option<Contact> {
    let unclamped = *pos;
    let max = extent - ball_size;
    let mut edge = None;

    if *pos < 0.0 {
        *pos = 0.0;
        edge = Some(low);
    }
    // Same test as `pos + ball_size > extent`, but exact in f32: result is always in [0, max]
    if *pos > max {
        *pos = max;
        edge = Some(high);
    }

    edge.map(|edge| {
        *vel = 0.0;
        *acc = 0.0;
        Contact { edge, unclamped }
    })
}

/// Clamp `pos` into the field, zeroing `vel` and `acc` on each axis that made contact
pub fn resolve_boundaries(pos: &mut Vec2, vel: &mut Vec2, acc: &mut Vec2, field: &Field) -> Contacts {
    let x = resolve_axis(
        &mut pos.x,
        &mut vel.x,
        &mut acc.x,
        field.width(),
        field.ball_size(),
        Edge::Left,
        Edge::Right,
    );
    let y = resolve_axis(
        &mut pos.y,
        &mut vel.y,
        &mut acc.y,
        field.height(),
        field.ball_size(),
        Edge::Top,
        Edge::Bottom,
    );

    Contacts { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Field {
        Field::new(300.0, 200.0, 50.0).unwrap()
    }

    #[test]
    fn test_inside_is_untouched() {
        let mut pos = Vec2::new(10.0, 20.0);
        let mut vel = Vec2::new(1.0, 2.0);
        let mut acc = Vec2::new(3.0, 4.0);

        let contacts = resolve_boundaries(&mut pos, &mut vel, &mut acc, &field());
        assert!(contacts.is_empty());
        assert_eq!(pos, Vec2::new(10.0, 20.0));
        assert_eq!(vel, Vec2::new(1.0, 2.0));
        assert_eq!(acc, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_left_edge() {
        let mut pos = Vec2::new(-3.0, 20.0);
        let mut vel = Vec2::new(-10.0, 5.0);
        let mut acc = Vec2::new(-7.0, 1.0);

        let contacts = resolve_boundaries(&mut pos, &mut vel, &mut acc, &field());
        assert_eq!(
            contacts.x,
            Some(Contact {
                edge: Edge::Left,
                unclamped: -3.0
            })
        );
        assert!(contacts.y.is_none());
        assert_eq!(pos, Vec2::new(0.0, 20.0));
        assert_eq!(vel, Vec2::new(0.0, 5.0));
        assert_eq!(acc, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_right_edge() {
        let mut pos = Vec2::new(260.0, 20.0);
        let mut vel = Vec2::new(10.0, 5.0);
        let mut acc = Vec2::new(7.0, 1.0);

        let contacts = resolve_boundaries(&mut pos, &mut vel, &mut acc, &field());
        assert!(contacts.touches(Edge::Right));
        assert_eq!(pos.x, 250.0);
        assert_eq!(vel.x, 0.0);
        assert_eq!(acc.x, 0.0);
    }

    #[test]
    fn test_top_and_bottom_edges() {
        let mut pos = Vec2::new(100.0, -1.0);
        let mut vel = Vec2::new(1.0, -1.0);
        let mut acc = Vec2::new(1.0, -1.0);
        let contacts = resolve_boundaries(&mut pos, &mut vel, &mut acc, &field());
        assert!(contacts.touches(Edge::Top));
        assert_eq!(pos.y, 0.0);
        assert_eq!(vel, Vec2::new(1.0, 0.0));
        assert_eq!(acc, Vec2::new(1.0, 0.0));

        let mut pos = Vec2::new(100.0, 151.0);
        let mut vel = Vec2::new(1.0, 1.0);
        let mut acc = Vec2::new(1.0, 1.0);
        let contacts = resolve_boundaries(&mut pos, &mut vel, &mut acc, &field());
        assert!(contacts.touches(Edge::Bottom));
        assert_eq!(pos.y, 150.0);
        assert_eq!(vel, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_corner_contact() {
        let mut pos = Vec2::new(400.0, -40.0);
        let mut vel = Vec2::new(10.0, -10.0);
        let mut acc = Vec2::new(10.0, -10.0);

        let contacts = resolve_boundaries(&mut pos, &mut vel, &mut acc, &field());
        assert!(contacts.is_corner());
        assert!(contacts.touches(Edge::Right));
        assert!(contacts.touches(Edge::Top));
        assert_eq!(pos, Vec2::new(250.0, 0.0));
        assert_eq!(vel, Vec2::ZERO);
        assert_eq!(acc, Vec2::ZERO);
    }

    #[test]
    fn test_exactly_on_edge_is_not_contact() {
        let mut pos = Vec2::new(250.0, 0.0);
        let mut vel = Vec2::new(3.0, 3.0);
        let mut acc = Vec2::new(3.0, 3.0);

        let contacts = resolve_boundaries(&mut pos, &mut vel, &mut acc, &field());
        assert!(contacts.is_empty());
        assert_eq!(vel, Vec2::new(3.0, 3.0));
    }
}
