//! Collision component: channel, response mask and bounds
//!
//! The component only answers whether two colliders are eligible to be
//! tested against each other and where their bounds are. Overlap tests and
//! responses belong to whatever query layer consumes it.

use std::any::Any;

use crate::ecs::{ActorBody, ActorKey, Component, ComponentType};
use crate::engine::Framework;
use crate::foundation::math::{Rect, Vec2};
use crate::physics::CollisionChannels;

/// Collision configuration of an actor
#[derive(Debug, Clone)]
pub struct CollisionComponent {
    owner: Option<ActorKey>,

    /// Channel this collider occupies
    collision_type: CollisionChannels,

    /// Channels this collider responds to
    collision_responses: CollisionChannels,

    size: Vec2,
}

impl Default for CollisionComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionComponent {
    /// Create a 10x10 collider on no channel that responds to nothing
    pub fn new() -> Self {
        Self {
            owner: None,
            collision_type: CollisionChannels::empty(),
            collision_responses: CollisionChannels::empty(),
            size: Vec2::new(10.0, 10.0),
        }
    }

    /// Builder pattern: Set channel and response mask
    pub fn with_channels(
        mut self,
        collision_type: CollisionChannels,
        collision_responses: CollisionChannels,
    ) -> Self {
        self.collision_type = collision_type;
        self.collision_responses = collision_responses;
        self
    }

    /// Builder pattern: Set size
    pub fn with_size(mut self, x: f32, y: f32) -> Self {
        self.set_size(x, y);
        self
    }

    /// Set the channel this collider occupies
    pub fn set_collision_type(&mut self, collision_type: CollisionChannels) {
        self.collision_type = collision_type;
    }

    /// Set the channels this collider responds to
    pub fn set_collision_responses(&mut self, collision_responses: CollisionChannels) {
        self.collision_responses = collision_responses;
    }

    /// Set the bounds size
    pub fn set_size(&mut self, x: f32, y: f32) {
        self.size = Vec2::new(x, y);
    }

    /// Channel this collider occupies
    pub fn collision_type(&self) -> CollisionChannels {
        self.collision_type
    }

    /// Channels this collider responds to
    pub fn collision_responses(&self) -> CollisionChannels {
        self.collision_responses
    }

    /// Bounds size
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Pivot-anchored bounds in world space
    pub fn world_rect(&self, body: &ActorBody) -> Rect {
        body.world_rect(self.size)
    }

    /// Pivot-anchored bounds relative to the actor position
    pub fn local_rect(&self, body: &ActorBody) -> Rect {
        body.local_rect(self.size)
    }

    /// Whether this collider and `other` should be tested against each other
    ///
    /// Either side responding to the other's channel is enough.
    pub fn can_interact_with(&self, other: &CollisionComponent) -> bool {
        CollisionChannels::should_interact(
            self.collision_type,
            self.collision_responses,
            other.collision_type,
            other.collision_responses,
        )
    }
}

impl Component for CollisionComponent {
    fn component_type(&self) -> ComponentType {
        ComponentType::Collision
    }

    fn owner(&self) -> Option<ActorKey> {
        self.owner
    }

    fn set_owner(&mut self, owner: Option<ActorKey>) {
        self.owner = owner;
    }

    fn render_post(&self, body: &ActorBody, framework: &mut Framework) {
        if !framework.config().debug.draw_collision_bounds {
            return;
        }

        let color = framework.config().colors.collision;
        let rect = self.world_rect(body);
        let mut points = rect.corners().to_vec();
        points.push(rect.origin());
        framework.draw_list_mut().polyline(points, color);
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
    use crate::ecs::Actor;
    use crate::render::DrawCommand;

    fn collider(
        collision_type: CollisionChannels,
        responses: CollisionChannels,
    ) -> CollisionComponent {
        CollisionComponent::new().with_channels(collision_type, responses)
    }

    #[test]
    fn test_static_and_movable_interact() {
        let block = collider(CollisionChannels::STATIC, CollisionChannels::MOVABLE);
        let circle = collider(
            CollisionChannels::MOVABLE,
            CollisionChannels::STATIC | CollisionChannels::MOVABLE,
        );

        assert!(block.can_interact_with(&circle));
        assert!(circle.can_interact_with(&block));
    }

    #[test]
    fn test_two_movables_interact() {
        let a = collider(
            CollisionChannels::MOVABLE,
            CollisionChannels::STATIC | CollisionChannels::MOVABLE,
        );
        let b = a.clone();

        assert!(a.can_interact_with(&b));
    }

    #[test]
    fn test_lines_interact_only_with_lines() {
        let line = collider(CollisionChannels::LINE, CollisionChannels::LINE);
        let block = collider(CollisionChannels::STATIC, CollisionChannels::MOVABLE);
        let circle = collider(
            CollisionChannels::MOVABLE,
            CollisionChannels::STATIC | CollisionChannels::MOVABLE,
        );

        assert!(line.can_interact_with(&line.clone()));
        assert!(!line.can_interact_with(&block));
        assert!(!line.can_interact_with(&circle));
    }

    #[test]
    fn test_two_statics_with_no_responses_ignore_each_other() {
        let a = collider(CollisionChannels::STATIC, CollisionChannels::empty());
        let b = collider(CollisionChannels::STATIC, CollisionChannels::empty());

        assert!(!a.can_interact_with(&b));
    }

    #[test]
    fn test_one_sided_response_is_enough() {
        let deaf = collider(CollisionChannels::STATIC, CollisionChannels::empty());
        let listener = collider(CollisionChannels::MOVABLE, CollisionChannels::STATIC);

        assert!(deaf.can_interact_with(&listener));
        assert!(listener.can_interact_with(&deaf));
    }

    #[test]
    fn test_bounds_follow_pivot() {
        let actor = Actor::new().with_position(100.0, 100.0);
        let collision = CollisionComponent::new().with_size(50.0, 50.0);

        assert_eq!(collision.world_rect(actor.body()), Rect::new(75.0, 50.0, 50.0, 50.0));
        assert_eq!(
            collision.local_rect(actor.body()).translated(actor.position()),
            collision.world_rect(actor.body())
        );
    }

    #[test]
    fn test_debug_bounds_only_when_enabled() {
        let actor = Actor::new();
        let collision = CollisionComponent::new();

        let mut framework = Framework::default();
        collision.render_post(actor.body(), &mut framework);
        assert!(framework.draw_list().is_empty());

        let mut config = EngineConfig::default();
        config.debug.draw_collision_bounds = true;
        let mut framework = Framework::new(config);
        collision.render_post(actor.body(), &mut framework);

        match &framework.draw_list().commands()[0] {
            DrawCommand::Polyline { points, .. } => {
                assert_eq!(points.len(), 5);
                assert_eq!(points.first(), points.last());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
