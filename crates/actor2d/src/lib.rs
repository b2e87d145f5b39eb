//! # Actor2D
//!
//! A minimal 2D actor-component runtime.
//!
//! ## Features
//!
//! - **Typed component slots**: each actor holds at most one component per
//!   [`ComponentType`](ecs::ComponentType); adding another replaces it
//! - **Pivot-anchored geometry**: local and world bounds derived from a size
//!   and a normalized pivot, with rotation applied per outline point
//! - **Collision channels**: bit-flag channels and response masks deciding
//!   which collider pairs are eligible for overlap tests
//! - **Recorded drawing**: render hooks record commands the host replays
//!
//! ## Quick Start
//!
//! ```rust
//! use actor2d::prelude::*;
//!
//! let mut world = World::new();
//! let block = world.spawn(
//!     Actor::new()
//!         .with_position(100.0, 100.0)
//!         .with_component(ShapeComponent::new_box().with_size(50.0, 50.0))
//!         .with_component(
//!             CollisionComponent::new()
//!                 .with_channels(CollisionChannels::STATIC, CollisionChannels::MOVABLE)
//!                 .with_size(50.0, 50.0),
//!         ),
//! );
//!
//! let mut framework = Framework::new(EngineConfig::default());
//! framework.begin_frame(1.0 / 60.0);
//! world.step(&mut framework);
//!
//! let bounds = world.get(block).map(|actor| actor.world_rect(Vec2::new(50.0, 50.0)));
//! assert_eq!(bounds, Some(Rect::new(75.0, 50.0, 50.0, 50.0)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod ecs;
pub mod render;
pub mod physics;

mod engine;

pub use engine::Framework;

/// Common imports for runtime users
pub mod prelude {
    pub use crate::{
        Framework,
        config::{Config, ConfigError, EngineConfig},
        foundation::math::{Matrix2, Rect, Transform2, Vec2},
        ecs::{Actor, ActorBehavior, ActorBody, ActorKey, Component, ComponentType, World},
        ecs::components::{CollisionComponent, MoveComponent, ShapeComponent, ShapeKind},
        physics::{candidate_pairs, CandidatePair, CollisionChannels},
        render::{Color, DrawCommand, DrawList},
    };
}
