//! Collision filtering
//!
//! Decides which pairs of colliders are eligible for an overlap test. The
//! overlap test itself and any response are left to the caller.

pub mod collision_layers;
pub mod collision_system;

pub use collision_layers::CollisionChannels;
pub use collision_system::{candidate_pairs, CandidatePair};
