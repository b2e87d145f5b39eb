//! Movement component for actors that move in the plane
//!
//! Integrates a constant velocity and angular velocity into the actor body
//! using the framework's scaled frame time.

use std::any::Any;

use crate::ecs::{ActorBody, ActorKey, Component, ComponentType};
use crate::engine::Framework;
use crate::foundation::math::Vec2;

/// Component for actors that can move
#[derive(Debug, Clone)]
pub struct MoveComponent {
    owner: Option<ActorKey>,

    /// Linear velocity in units per second
    pub velocity: Vec2,

    /// Angular velocity in radians per second
    pub angular_velocity: f32,

    /// Whether movement is enabled
    pub enabled: bool,
}

impl Default for MoveComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveComponent {
    /// Create a stationary movement component
    pub fn new() -> Self {
        Self {
            owner: None,
            velocity: Vec2::zeros(),
            angular_velocity: 0.0,
            enabled: true,
        }
    }

    /// Create a movement component with initial velocity
    pub fn with_velocity(velocity: Vec2) -> Self {
        Self {
            velocity,
            ..Self::new()
        }
    }

    /// Create a movement component that only rotates
    pub fn with_angular_velocity(angular_velocity: f32) -> Self {
        Self {
            angular_velocity,
            ..Self::new()
        }
    }

    /// Set velocity
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Add to velocity
    pub fn add_velocity(&mut self, delta_velocity: Vec2) {
        self.velocity += delta_velocity;
    }

    /// Set angular velocity
    pub fn set_angular_velocity(&mut self, angular_velocity: f32) {
        self.angular_velocity = angular_velocity;
    }

    /// Enable or disable movement
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Apply one integration step to `body`
    pub fn integrate(&self, body: &mut ActorBody, delta_time: f32) {
        if !self.enabled {
            return;
        }

        let step = self.velocity * delta_time;
        body.add_position(step.x, step.y);

        if self.angular_velocity != 0.0 {
            body.transform_mut().add_rotation(self.angular_velocity * delta_time);
        }
    }
}

impl Component for MoveComponent {
    fn component_type(&self) -> ComponentType {
        ComponentType::Move
    }

    fn owner(&self) -> Option<ActorKey> {
        self.owner
    }

    fn set_owner(&mut self, owner: Option<ActorKey>) {
        self.owner = owner;
    }

    fn update(&mut self, body: &mut ActorBody, framework: &Framework) {
        self.integrate(body, framework.time().scaled_delta_time());
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use approx::assert_relative_eq;

    #[test]
    fn test_movement_component_creation() {
        let movement = MoveComponent::new();

        assert_eq!(movement.velocity, Vec2::zeros());
        assert_eq!(movement.angular_velocity, 0.0);
        assert!(movement.enabled);
        assert_eq!(movement.component_type(), ComponentType::Move);
    }

    #[test]
    fn test_velocity_operations() {
        let mut movement = MoveComponent::new();
        movement.set_velocity(Vec2::new(1.0, 2.0));
        movement.add_velocity(Vec2::new(0.5, 0.5));

        assert_eq!(movement.velocity, Vec2::new(1.5, 2.5));
    }

    #[test]
    fn test_integration() {
        let mut body = ActorBody::default();
        let mut movement = MoveComponent::with_velocity(Vec2::new(10.0, -4.0));
        movement.set_angular_velocity(2.0);

        movement.integrate(&mut body, 0.5);

        assert_relative_eq!(body.position(), Vec2::new(5.0, -2.0));
        assert_relative_eq!(body.rotation(), 1.0);
    }

    #[test]
    fn test_disabled_does_not_move() {
        let mut body = ActorBody::default();
        let mut movement = MoveComponent::with_velocity(Vec2::new(10.0, 0.0));
        movement.set_enabled(false);

        movement.integrate(&mut body, 1.0);

        assert_eq!(body.position(), Vec2::zeros());
    }

    #[test]
    fn test_update_uses_scaled_time() {
        let mut config = EngineConfig::default();
        config.time_scale = 0.5;
        let mut framework = Framework::new(config);
        framework.begin_frame(1.0);

        let mut body = ActorBody::default();
        let mut movement = MoveComponent::with_velocity(Vec2::new(8.0, 0.0));
        movement.update(&mut body, &framework);

        assert_relative_eq!(body.position(), Vec2::new(4.0, 0.0));
    }
}
