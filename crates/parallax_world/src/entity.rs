//! The entity container.
//!
//! An entity is a uniquely-identified, heterogeneous bag of components
//! keyed by concrete component type. It exclusively owns its components;
//! everything else observes them through short-lived borrows.

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;

use parallax_foundation::{EntityId, Kind, TypeTag};

use crate::component::Component;

/// A single game object: an id, a kind tag, an active flag, and at most one
/// owned component per concrete component type.
///
/// The kind tag carries the entity's concrete runtime identity for
/// multimethod dispatch; components carry its state. Adding a second
/// component of the same concrete type replaces (and destroys) the first.
pub struct Entity {
    id: EntityId,
    tag: TypeTag,
    active: bool,
    components: HashMap<TypeId, Box<dyn Component>>,
    /// Guards exactly-once `on_destroy` fan-out.
    destroyed: bool,
}

impl Entity {
    /// Creates an entity with the given id and kind tag.
    ///
    /// Public so external factories (level loaders) can pre-build entities
    /// before handing them to the manager; in normal flow the manager's
    /// `spawn` does this.
    #[must_use]
    pub fn new(id: EntityId, tag: TypeTag) -> Self {
        Self {
            id,
            tag,
            active: true,
            components: HashMap::new(),
            destroyed: false,
        }
    }

    /// Creates an entity of kind `K`.
    #[must_use]
    pub fn of_kind<K: Kind>(id: EntityId) -> Self {
        Self::new(id, TypeTag::of::<K>())
    }

    /// Returns this entity's unique id.
    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Returns this entity's kind tag.
    #[must_use]
    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Returns true if this entity is of kind `K`.
    #[must_use]
    pub fn is_kind<K: Kind>(&self) -> bool {
        self.tag.is::<K>()
    }

    /// Returns whether this entity participates in update and collision
    /// passes.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Sets the active flag.
    ///
    /// Deactivation is the soft-delete mechanism: an inactive entity is
    /// skipped by updates and collisions until a sweep reclaims it.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Marks this entity inactive.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Attaches a component, replacing any existing component of the same
    /// concrete type.
    ///
    /// The replaced component receives `on_destroy` before it is dropped.
    /// The new component receives `on_attach` with this entity's id, and a
    /// borrow of it is returned.
    pub fn add_component<T: Component>(&mut self, mut component: T) -> &mut T {
        component.on_attach(self.id);
        if let Some(mut old) = self
            .components
            .insert(TypeId::of::<T>(), Box::new(component))
        {
            old.on_destroy();
        }
        self.components
            .get_mut(&TypeId::of::<T>())
            // Deref past the box first: calling `as_any_mut` on the box
            // itself would erase the box, not the component.
            .and_then(|boxed| (**boxed).as_any_mut().downcast_mut::<T>())
            .expect("slot was just filled with a component of this type")
    }

    /// Returns the component of type `T`, if present.
    #[must_use]
    pub fn component<T: Component>(&self) -> Option<&T> {
        self.components
            .get(&TypeId::of::<T>())
            .and_then(|boxed| (**boxed).as_any().downcast_ref::<T>())
    }

    /// Returns the component of type `T` mutably, if present.
    #[must_use]
    pub fn component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| (**boxed).as_any_mut().downcast_mut::<T>())
    }

    /// Returns true if a component of type `T` is attached.
    #[must_use]
    pub fn has_component<T: Component>(&self) -> bool {
        self.components.contains_key(&TypeId::of::<T>())
    }

    /// Removes and destroys the component of type `T`.
    ///
    /// Returns true if one was present; no-op otherwise.
    pub fn remove_component<T: Component>(&mut self) -> bool {
        match self.components.remove(&TypeId::of::<T>()) {
            Some(mut removed) => {
                removed.on_destroy();
                true
            }
            None => false,
        }
    }

    /// Returns the number of attached components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Forwards the frame delta to every owned component.
    ///
    /// Iteration order over the type-keyed map is unspecified; gameplay
    /// logic must not depend on relative component update order.
    pub fn update(&mut self, dt: f32) {
        for component in self.components.values_mut() {
            component.update(dt);
        }
    }

    /// Notifies all components that this entity is going away.
    ///
    /// Fans out `on_destroy` exactly once no matter how many teardown paths
    /// reach it; repeated calls are no-ops. `Drop` also routes here, so an
    /// entity that simply goes out of scope still tears its components down.
    pub fn on_destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        for component in self.components.values_mut() {
            component.on_destroy();
        }
    }
}

impl Drop for Entity {
    fn drop(&mut self) {
        self.on_destroy();
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("tag", &self.tag)
            .field("active", &self.active)
            .field("components", &self.components.len())
            .finish()
    }
}
