//! Actor recipes: fixed bundles of components used by the demo scene

use actor2d::foundation::math::utils::deg_to_rad;
use actor2d::prelude::*;

/// Moving box that collides with blocks and other movers
pub fn circle_actor(config: &EngineConfig, velocity: Vec2) -> Actor {
    Actor::from_config(config)
        .with_component(MoveComponent::with_velocity(velocity))
        .with_component(ShapeComponent::new_box().with_size(50.0, 50.0).with_color(Color::RED))
        .with_component(
            CollisionComponent::new()
                .with_channels(
                    CollisionChannels::MOVABLE,
                    CollisionChannels::STATIC | CollisionChannels::MOVABLE,
                )
                .with_size(50.0, 50.0),
        )
}

/// Static block that only responds to movers
pub fn block_actor(config: &EngineConfig) -> Actor {
    Actor::from_config(config)
        .with_component(ShapeComponent::new_box().with_size(50.0, 50.0))
        .with_component(
            CollisionComponent::new()
                .with_channels(CollisionChannels::STATIC, CollisionChannels::MOVABLE)
                .with_size(50.0, 50.0),
        )
}

/// Line segment anchored at its top-left, colliding with other lines
pub fn line_actor(x: f32, y: f32) -> Actor {
    Actor::new()
        .with_pivot(0.0, 0.0)
        .with_component(MoveComponent::new())
        .with_component(ShapeComponent::new_line().with_size(x, y))
        .with_component(
            CollisionComponent::new()
                .with_channels(CollisionChannels::LINE, CollisionChannels::LINE)
                .with_size(x, y),
        )
}

/// Block that spins in place from its tick hook
pub fn rotate_actor(config: &EngineConfig, degrees_per_second: f32) -> Actor {
    block_actor(config).with_behavior(Spin {
        radians_per_second: deg_to_rad(degrees_per_second),
    })
}

/// Mesh square drawn from explicit vertices
pub fn mesh_actor(config: &EngineConfig, size: f32) -> Actor {
    Actor::from_config(config).with_component(
        ShapeComponent::new_mesh(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(size, 0.0),
            Vec2::new(size, size),
            Vec2::new(0.0, size),
        ])
        .with_color(Color::BLUE),
    )
}

struct Spin {
    radians_per_second: f32,
}

impl ActorBehavior for Spin {
    fn tick(&mut self, body: &mut ActorBody, framework: &Framework) {
        let delta = self.radians_per_second * framework.time().scaled_delta_time();
        body.transform_mut().add_rotation(delta);
    }
}
