//! Built-in components

pub mod shape;
pub mod collision;
pub mod movement;

pub use shape::{ShapeComponent, ShapeKind};
pub use collision::CollisionComponent;
pub use movement::MoveComponent;
