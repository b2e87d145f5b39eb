//! Collision channels for filtering collision candidates
//!
//! Every collider occupies one channel and carries a response mask of the
//! channels it wants to be tested against.

bitflags::bitflags! {
    /// Set of collision channels
    ///
    /// A single flag names the channel a collider occupies; a combination is
    /// used as a response mask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CollisionChannels: u32 {
        /// Immovable level geometry
        const STATIC = 1 << 0;
        /// Moving actors
        const MOVABLE = 1 << 1;
        /// Line segments
        const LINE = 1 << 2;
    }
}

impl CollisionChannels {
    /// Check whether two colliders should be tested against each other
    ///
    /// The pair is eligible when either side responds to the other's
    /// channel. An empty channel never matches anything.
    ///
    /// # Example
    /// ```
    /// use actor2d::physics::CollisionChannels;
    ///
    /// // Blocks only respond to movers, movers respond to both
    /// let eligible = CollisionChannels::should_interact(
    ///     CollisionChannels::STATIC, CollisionChannels::MOVABLE,
    ///     CollisionChannels::MOVABLE, CollisionChannels::STATIC | CollisionChannels::MOVABLE,
    /// );
    /// assert!(eligible);
    /// ```
    pub fn should_interact(
        type_a: CollisionChannels,
        responses_a: CollisionChannels,
        type_b: CollisionChannels,
        responses_b: CollisionChannels,
    ) -> bool {
        responses_a.intersects(type_b) || responses_b.intersects(type_a)
    }
}
