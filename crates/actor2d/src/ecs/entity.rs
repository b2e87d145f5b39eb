//! Actor handles

slotmap::new_key_type! {
    /// Generational handle to an actor stored in a [`World`](super::World)
    ///
    /// Components keep one as a non-owning back-reference to their actor.
    pub struct ActorKey;
}
