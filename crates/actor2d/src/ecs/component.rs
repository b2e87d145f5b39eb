//! Component trait and the closed set of component types

use std::any::Any;

use super::{ActorBody, ActorKey};
use crate::engine::Framework;

/// Capability categories an actor can hold, one slot each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentType {
    /// Visible geometry
    Shape,
    /// Collision channel and bounds
    Collision,
    /// Per-frame movement
    Move,
}

impl ComponentType {
    /// Number of component types
    pub const COUNT: usize = 3;

    /// Every component type in ordinal order
    pub const ALL: [Self; Self::COUNT] = [Self::Shape, Self::Collision, Self::Move];

    /// Slot index of this type
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Capability module attached to an actor
///
/// Hooks receive the owning actor's [`ActorBody`] for the duration of the
/// call. The component itself only keeps the actor's key.
pub trait Component: Any {
    /// Slot this component occupies
    fn component_type(&self) -> ComponentType;

    /// Key of the owning actor, once the actor has been spawned
    fn owner(&self) -> Option<ActorKey>;

    /// Record the owning actor, or clear it when the actor leaves its world
    fn set_owner(&mut self, owner: Option<ActorKey>);

    /// Per-frame logic
    fn update(&mut self, _body: &mut ActorBody, _framework: &Framework) {}

    /// Primary draw
    fn render(&self, _body: &ActorBody, _framework: &mut Framework) {}

    /// Overlay draw, after every component's primary draw
    fn render_post(&self, _body: &ActorBody, _framework: &mut Framework) {}

    /// Upcast for typed lookups
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for typed lookups
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_dense() {
        for (i, ty) in ComponentType::ALL.iter().enumerate() {
            assert_eq!(ty.index(), i);
        }
    }
}
