//! Actors: positioned holders of typed components
//!
//! An actor owns its spatial state ([`ActorBody`]) and one slot per
//! [`ComponentType`]. Behaviour comes from the attached components and an
//! optional [`ActorBehavior`] tick hook, not from actor subtypes.

use super::{ActorKey, Component, ComponentType};
use crate::config::EngineConfig;
use crate::engine::Framework;
use crate::foundation::math::{Matrix2, Rect, Transform2, Vec2};

/// Spatial state of an actor
///
/// `position` is the single authoritative world position. The transform only
/// carries rotation and scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorBody {
    key: Option<ActorKey>,
    position: Vec2,
    pivot: Vec2,
    transform: Transform2,
}

impl Default for ActorBody {
    fn default() -> Self {
        Self::new(Vec2::new(0.5, 1.0))
    }
}

impl ActorBody {
    /// Create a body at the origin with the given pivot
    pub fn new(pivot: Vec2) -> Self {
        Self {
            key: None,
            position: Vec2::zeros(),
            pivot,
            transform: Transform2::default(),
        }
    }

    /// Key of the actor in its world, once spawned
    pub fn key(&self) -> Option<ActorKey> {
        self.key
    }

    /// World position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Set the world position
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Move by an offset
    pub fn add_position(&mut self, x: f32, y: f32) {
        self.position += Vec2::new(x, y);
    }

    /// Normalized anchor: `(0,0)` is the top-left, `(1,1)` the bottom-right
    pub fn pivot(&self) -> Vec2 {
        self.pivot
    }

    /// Set the normalized anchor
    pub fn set_pivot(&mut self, x: f32, y: f32) {
        self.pivot = Vec2::new(x, y);
    }

    /// Rotation and scale
    pub fn transform(&self) -> &Transform2 {
        &self.transform
    }

    /// Mutable rotation and scale
    pub fn transform_mut(&mut self) -> &mut Transform2 {
        &mut self.transform
    }

    /// Rotation in radians
    pub fn rotation(&self) -> f32 {
        self.transform.rotation()
    }

    /// Set the rotation in radians
    pub fn set_rotation(&mut self, rotation: f32) {
        self.transform.set_rotation(rotation);
    }

    /// Rotation matrix for the current angle
    pub fn rotation_matrix(&self) -> &Matrix2 {
        self.transform.rotation_matrix()
    }

    /// Rectangle of `size` placed so the pivot point lands on the position
    ///
    /// The rectangle spans `position - size * pivot` to
    /// `position + size * (1 - pivot)`.
    pub fn world_rect(&self, size: Vec2) -> Rect {
        let origin = self.position - size.component_mul(&self.pivot);
        Rect::from_origin_size(origin, size)
    }

    /// Same placement as [`world_rect`](Self::world_rect), relative to the position
    pub fn local_rect(&self, size: Vec2) -> Rect {
        let origin = -size.component_mul(&self.pivot);
        Rect::from_origin_size(origin, size)
    }
}

/// Per-frame actor behaviour, run before component updates
pub trait ActorBehavior {
    /// Called once per frame
    fn tick(&mut self, body: &mut ActorBody, framework: &Framework);
}

/// A positioned entity holding at most one component per type
pub struct Actor {
    body: ActorBody,
    slots: [Option<Box<dyn Component>>; ComponentType::COUNT],
    order: Vec<ComponentType>,
    behavior: Option<Box<dyn ActorBehavior>>,
}

impl Default for Actor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Actor")
            .field("body", &self.body)
            .field("components", &self.order)
            .field("has_behavior", &self.behavior.is_some())
            .finish()
    }
}

impl Actor {
    /// Create an actor at the origin with pivot `(0.5, 1.0)`
    pub fn new() -> Self {
        Self::with_body(ActorBody::default())
    }

    /// Create an actor using the configured default pivot
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_body(ActorBody::new(config.default_pivot))
    }

    fn with_body(body: ActorBody) -> Self {
        Self {
            body,
            slots: Default::default(),
            order: Vec::new(),
            behavior: None,
        }
    }

    /// Builder pattern: Set position
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.body.set_position(x, y);
        self
    }

    /// Builder pattern: Set pivot
    pub fn with_pivot(mut self, x: f32, y: f32) -> Self {
        self.body.set_pivot(x, y);
        self
    }

    /// Builder pattern: Set rotation
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.body.set_rotation(rotation);
        self
    }

    /// Builder pattern: Attach a component
    pub fn with_component<C: Component>(mut self, component: C) -> Self {
        self.add_component(component);
        self
    }

    /// Builder pattern: Set the tick behaviour
    pub fn with_behavior<B: ActorBehavior + 'static>(mut self, behavior: B) -> Self {
        self.behavior = Some(Box::new(behavior));
        self
    }

    /// Spatial state
    pub fn body(&self) -> &ActorBody {
        &self.body
    }

    /// Mutable spatial state
    pub fn body_mut(&mut self) -> &mut ActorBody {
        &mut self.body
    }

    /// Key in the owning world, once spawned
    pub fn key(&self) -> Option<ActorKey> {
        self.body.key()
    }

    /// Attach a component to the slot of its type
    ///
    /// A component already in that slot is replaced and returned. The slot
    /// keeps its original position in the update/render order.
    pub fn add_component<C: Component>(&mut self, component: C) -> Option<Box<dyn Component>> {
        self.add_boxed_component(Box::new(component))
    }

    /// Attach an already boxed component
    pub fn add_boxed_component(
        &mut self,
        mut component: Box<dyn Component>,
    ) -> Option<Box<dyn Component>> {
        let component_type = component.component_type();
        component.set_owner(self.body.key);

        let previous = self.slots[component_type.index()].replace(component);
        if previous.is_some() {
            log::debug!("Replaced {:?} component on actor {:?}", component_type, self.body.key);
        } else {
            self.order.push(component_type);
        }
        previous
    }

    /// Component in the slot for `component_type`
    pub fn component_by_type(&self, component_type: ComponentType) -> Option<&dyn Component> {
        self.slots[component_type.index()].as_deref()
    }

    /// Mutable component in the slot for `component_type`
    pub fn component_by_type_mut(
        &mut self,
        component_type: ComponentType,
    ) -> Option<&mut (dyn Component + 'static)> {
        self.slots[component_type.index()].as_deref_mut()
    }

    /// Whether a component of `component_type` is attached
    pub fn has_component(&self, component_type: ComponentType) -> bool {
        self.slots[component_type.index()].is_some()
    }

    /// First attached component of concrete type `T`
    pub fn component<T: Component>(&self) -> Option<&T> {
        self.components().find_map(|c| c.as_any().downcast_ref::<T>())
    }

    /// Mutable access to the first attached component of concrete type `T`
    ///
    /// Searches in insertion order, like [`component`](Self::component).
    pub fn component_mut<T: Component>(&mut self) -> Option<&mut T> {
        let index = self.order.iter().map(|ty| ty.index()).find(|&index| {
            self.slots[index]
                .as_deref()
                .is_some_and(|c| c.as_any().is::<T>())
        })?;
        self.slots[index]
            .as_deref_mut()
            .and_then(|c| c.as_any_mut().downcast_mut::<T>())
    }

    /// Attached components in insertion order
    pub fn components(&self) -> impl Iterator<Item = &dyn Component> + '_ {
        self.order
            .iter()
            .filter_map(move |ty| self.slots[ty.index()].as_deref())
    }

    /// Number of attached components
    pub fn component_count(&self) -> usize {
        self.order.len()
    }

    /// World position
    pub fn position(&self) -> Vec2 {
        self.body.position()
    }

    /// Set the world position
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.body.set_position(x, y);
    }

    /// Move by an offset
    pub fn add_position(&mut self, x: f32, y: f32) {
        self.body.add_position(x, y);
    }

    /// Normalized anchor
    pub fn pivot(&self) -> Vec2 {
        self.body.pivot()
    }

    /// Set the normalized anchor
    pub fn set_pivot(&mut self, x: f32, y: f32) {
        self.body.set_pivot(x, y);
    }

    /// Pivot-anchored world rectangle of `size`
    pub fn world_rect(&self, size: Vec2) -> Rect {
        self.body.world_rect(size)
    }

    /// Run the tick behaviour, if any
    pub fn tick(&mut self, framework: &Framework) {
        if let Some(behavior) = self.behavior.as_mut() {
            behavior.tick(&mut self.body, framework);
        }
    }

    /// Update every component in insertion order
    pub fn update_components(&mut self, framework: &Framework) {
        let Self { body, slots, order, .. } = self;
        for component_type in order.iter() {
            if let Some(component) = slots[component_type.index()].as_mut() {
                component.update(body, framework);
            }
        }
    }

    /// Render every component, then every component's overlay
    pub fn render_components(&self, framework: &mut Framework) {
        for component in self.components() {
            component.render(&self.body, framework);
        }

        for component in self.components() {
            component.render_post(&self.body, framework);
        }
    }

    pub(crate) fn attach(&mut self, key: ActorKey) {
        self.set_key(Some(key));
    }

    pub(crate) fn detach(&mut self) {
        self.set_key(None);
    }

    fn set_key(&mut self, key: Option<ActorKey>) {
        self.body.key = key;
        for component in self.slots.iter_mut().flatten() {
            component.set_owner(key);
        }
    }
}
