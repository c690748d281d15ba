//! The spatial-provider component.

use parallax_foundation::Vec2;

use crate::component::Component;

/// Position and velocity in pixel coordinates.
///
/// This is the component the collision pass reads positions from; entities
/// without one are excluded from collision consideration. `update`
/// integrates velocity over the frame delta; anything fancier (gravity,
/// contacts) belongs to an external physics collaborator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Transform {
    position: Vec2,
    velocity: Vec2,
}

impl Transform {
    /// Creates a transform at the given position with zero velocity.
    #[must_use]
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
        }
    }

    /// Creates a transform with position and velocity.
    #[must_use]
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    /// Returns the current position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Moves to an absolute position.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Offsets the current position.
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Returns the current velocity.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Sets the velocity.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }
}

impl Component for Transform {
    fn update(&mut self, dt: f32) {
        self.position += self.velocity.scaled(dt);
    }
}
