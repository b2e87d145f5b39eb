//! Candidate pair collection
//!
//! Walks every pair of actors carrying a collision component and keeps the
//! ones whose channels allow an interaction. There is no spatial
//! acceleration: the cost is quadratic in the number of colliders.

use crate::ecs::components::CollisionComponent;
use crate::ecs::{ActorKey, World};
use crate::foundation::math::Rect;

/// A pair of colliders eligible for an overlap test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidatePair {
    /// First actor
    pub a: ActorKey,
    /// Second actor
    pub b: ActorKey,
    /// World bounds of the first actor's collider
    pub bounds_a: Rect,
    /// World bounds of the second actor's collider
    pub bounds_b: Rect,
}

/// Collect every unordered pair of colliders that pass the channel filter
///
/// Actors without a collision component are skipped. Each pair appears once.
pub fn candidate_pairs(world: &World) -> Vec<CandidatePair> {
    let colliders: Vec<(ActorKey, &CollisionComponent, Rect)> = world
        .iter()
        .filter_map(|(key, actor)| {
            let collision = actor.component::<CollisionComponent>()?;
            Some((key, collision, collision.world_rect(actor.body())))
        })
        .collect();

    let mut pairs = Vec::new();
    for (i, &(key_a, collision_a, bounds_a)) in colliders.iter().enumerate() {
        for &(key_b, collision_b, bounds_b) in &colliders[i + 1..] {
            if collision_a.can_interact_with(collision_b) {
                pairs.push(CandidatePair {
                    a: key_a,
                    b: key_b,
                    bounds_a,
                    bounds_b,
                });
            }
        }
    }

    log::trace!("{} colliders, {} candidate pairs", colliders.len(), pairs.len());
    pairs
}
