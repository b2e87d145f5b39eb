//! Actor-component runtime
//!
//! Actors hold one component per [`ComponentType`] and live in a [`World`]
//! arena that drives the per-frame tick, update and render passes.

pub mod world;
pub mod entity;
pub mod component;
pub mod actor;
pub mod components;

pub use world::World;
pub use entity::ActorKey;
pub use component::{Component, ComponentType};
pub use actor::{Actor, ActorBehavior, ActorBody};
