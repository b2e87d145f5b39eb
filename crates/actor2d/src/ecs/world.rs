//! Actor arena and frame stepping

use slotmap::SlotMap;

use super::{Actor, ActorKey};
use crate::engine::Framework;
use crate::physics::{candidate_pairs, CandidatePair};

/// Arena owning every actor
///
/// Actors are addressed by generational [`ActorKey`]s, so a key held by a
/// component never resolves to a different actor after a despawn.
#[derive(Debug, Default)]
pub struct World {
    actors: SlotMap<ActorKey, Actor>,
}

impl World {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an actor and attach its components to the new key
    pub fn spawn(&mut self, actor: Actor) -> ActorKey {
        let key = self.actors.insert_with_key(|key| {
            let mut actor = actor;
            actor.attach(key);
            actor
        });
        log::debug!("Spawned actor {:?}", key);
        key
    }

    /// Remove an actor, returning it if the key was live
    ///
    /// The returned actor and its components no longer carry the dead key.
    pub fn despawn(&mut self, key: ActorKey) -> Option<Actor> {
        let mut actor = self.actors.remove(key)?;
        actor.detach();
        log::debug!("Despawned actor {:?}", key);
        Some(actor)
    }

    /// Look up an actor
    pub fn get(&self, key: ActorKey) -> Option<&Actor> {
        self.actors.get(key)
    }

    /// Look up an actor mutably
    pub fn get_mut(&mut self, key: ActorKey) -> Option<&mut Actor> {
        self.actors.get_mut(key)
    }

    /// Whether the key refers to a live actor
    pub fn contains(&self, key: ActorKey) -> bool {
        self.actors.contains_key(key)
    }

    /// Number of live actors
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Whether the world holds no actors
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Iterate over all actors
    pub fn iter(&self) -> impl Iterator<Item = (ActorKey, &Actor)> {
        self.actors.iter()
    }

    /// Iterate mutably over all actors
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ActorKey, &mut Actor)> {
        self.actors.iter_mut()
    }

    /// Pairs of colliders eligible for an overlap test, with their bounds
    pub fn collision_candidates(&self) -> Vec<CandidatePair> {
        candidate_pairs(self)
    }

    /// Run one frame: tick every actor, then update, then render
    ///
    /// Each phase finishes for all actors before the next starts. The caller
    /// advances the framework clock beforehand.
    pub fn step(&mut self, framework: &mut Framework) {
        for actor in self.actors.values_mut() {
            actor.tick(framework);
        }

        for actor in self.actors.values_mut() {
            actor.update_components(framework);
        }

        for actor in self.actors.values() {
            actor.render_components(framework);
        }

        log::trace!(
            "Frame {} stepped {} actors, {} draw commands",
            framework.time().frame_count(),
            self.actors.len(),
            framework.draw_list().len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{CollisionComponent, MoveComponent, ShapeComponent};
    use crate::ecs::ComponentType;
    use crate::physics::CollisionChannels;
    use crate::foundation::math::Vec2;
    use approx::assert_relative_eq;

    #[test]
    fn test_spawn_attaches_owner() {
        let mut world = World::new();
        let key = world.spawn(
            Actor::new()
                .with_component(ShapeComponent::new_box())
                .with_component(CollisionComponent::new()),
        );

        let actor = world.get(key).unwrap();
        assert_eq!(actor.key(), Some(key));
        for component in actor.components() {
            assert_eq!(component.owner(), Some(key));
        }
    }

    #[test]
    fn test_component_added_after_spawn_gets_owner() {
        let mut world = World::new();
        let key = world.spawn(Actor::new());

        let actor = world.get_mut(key).unwrap();
        actor.add_component(MoveComponent::new());

        let owner = actor.component_by_type(ComponentType::Move).and_then(|c| c.owner());
        assert_eq!(owner, Some(key));
    }

    #[test]
    fn test_despawn_invalidates_key() {
        let mut world = World::new();
        let key = world.spawn(Actor::new());

        assert!(world.despawn(key).is_some());
        assert!(world.despawn(key).is_none());
        assert!(!world.contains(key));

        let reused = world.spawn(Actor::new());
        assert_ne!(reused, key);
        assert!(world.get(key).is_none());
    }

    #[test]
    fn test_despawn_clears_owner() {
        let mut world = World::new();
        let key = world.spawn(Actor::new().with_component(ShapeComponent::new_box()));

        let mut actor = world.despawn(key).unwrap();
        assert!(actor.key().is_none());
        assert!(actor.components().all(|c| c.owner().is_none()));

        actor.add_component(MoveComponent::new());
        let owner = actor.component_by_type(ComponentType::Move).and_then(|c| c.owner());
        assert!(owner.is_none());
    }

    #[test]
    fn test_collision_candidates_match_free_query() {
        let mut world = World::new();
        let block = world.spawn(Actor::new().with_component(
            CollisionComponent::new()
                .with_channels(CollisionChannels::STATIC, CollisionChannels::MOVABLE),
        ));
        let ball = world.spawn(Actor::new().with_position(20.0, 0.0).with_component(
            CollisionComponent::new()
                .with_channels(CollisionChannels::MOVABLE, CollisionChannels::empty()),
        ));

        let pairs = world.collision_candidates();

        assert_eq!(pairs.len(), 1);
        let keys = [pairs[0].a, pairs[0].b];
        assert!(keys.contains(&block) && keys.contains(&ball));
        assert_eq!(pairs.len(), candidate_pairs(&world).len());
    }

    #[test]
    fn test_step_moves_then_renders_new_position() {
        let mut world = World::new();
        let key = world.spawn(
            Actor::new()
                .with_component(MoveComponent::with_velocity(Vec2::new(10.0, 0.0)))
                .with_component(ShapeComponent::new_box().with_size(2.0, 2.0)),
        );
        let mut framework = Framework::default();
        framework.begin_frame(1.0);

        world.step(&mut framework);

        let position = world.get(key).unwrap().position();
        assert_relative_eq!(position, Vec2::new(10.0, 0.0));
        assert!(!framework.draw_list().is_empty());
    }
}
