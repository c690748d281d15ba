//! The authoritative entity registry.

use std::collections::HashMap;

use log::debug;
use parallax_foundation::{EntityId, Error, Kind, Result};

use crate::entity::Entity;

/// Owns every live entity for the simulation, keyed by id.
///
/// Ids are unique and monotonically increasing for the manager's lifetime;
/// an id is never reused after its entity is destroyed. Destruction is
/// synchronous and immediate: there is no generational or deferred
/// reclamation beyond the active-flag soft delete plus
/// [`remove_inactive`](Self::remove_inactive) sweep.
#[derive(Default)]
pub struct EntityManager {
    entities: HashMap<EntityId, Entity>,
    next_id: u64,
}

impl EntityManager {
    /// Creates an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an entity of kind `K` with a fresh id and returns a borrow
    /// of it, for attaching components.
    pub fn spawn<K: Kind>(&mut self) -> &mut Entity {
        let id = self.allocate_id();
        self.entities.insert(id, Entity::of_kind::<K>(id));
        self.entities
            .get_mut(&id)
            .expect("entity was just inserted under this id")
    }

    /// Hands out a fresh id for an externally-built entity.
    ///
    /// Level loaders and other factories construct an [`Entity`] around a
    /// reserved id, then adopt it via [`insert`](Self::insert).
    pub fn reserve_id(&mut self) -> EntityId {
        self.allocate_id()
    }

    /// Adopts an already-constructed entity, keyed by its own id.
    ///
    /// Keeps id monotonicity intact by bumping the internal counter past
    /// the adopted id.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DuplicateEntity`](parallax_foundation::ErrorKind::DuplicateEntity)
    /// if an entity with this id is already live.
    pub fn insert(&mut self, entity: Entity) -> Result<EntityId> {
        let id = entity.id();
        if self.entities.contains_key(&id) {
            return Err(Error::duplicate_entity(id));
        }
        self.next_id = self.next_id.max(id.raw().saturating_add(1));
        self.entities.insert(id, entity);
        Ok(id)
    }

    /// Returns the entity with the given id, if it is live.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Returns the entity with the given id mutably, if it is live.
    #[must_use]
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Returns disjoint mutable borrows of two distinct entities.
    ///
    /// This is how a collision handler gets both parties of a pair at once.
    /// Returns `None` if the ids are equal or either entity is not live.
    #[must_use]
    pub fn get_pair_mut(
        &mut self,
        a: EntityId,
        b: EntityId,
    ) -> Option<(&mut Entity, &mut Entity)> {
        if a == b {
            return None;
        }
        let [ea, eb] = self.entities.get_disjoint_mut([&a, &b]);
        Some((ea?, eb?))
    }

    /// Removes and destroys the entity with the given id immediately.
    ///
    /// Returns true if it was live; no-op otherwise. The entity's
    /// components receive `on_destroy` as it drops.
    pub fn destroy(&mut self, id: EntityId) -> bool {
        self.entities.remove(&id).is_some()
    }

    /// Forwards the frame delta to every *active* entity.
    ///
    /// Inactive entities are skipped entirely. Visit order follows the
    /// internal hash map and is not stable across entity-set mutation;
    /// gameplay logic must not depend on relative update order.
    pub fn update_all(&mut self, dt: f32) {
        for entity in self.entities.values_mut() {
            if entity.is_active() {
                entity.update(dt);
            }
        }
    }

    /// Destroys every entity whose active flag is false.
    ///
    /// This is the bulk reclamation mechanism; reclamation is synchronous.
    /// Returns the number of entities removed.
    pub fn remove_inactive(&mut self) -> usize {
        let mut removed = 0;
        self.entities.retain(|_, entity| {
            if entity.is_active() {
                true
            } else {
                removed += 1;
                false
            }
        });
        if removed > 0 {
            debug!("swept {removed} inactive entities, {} live", self.entities.len());
        }
        removed
    }

    /// Returns a snapshot of all live entity ids, in spawn order.
    ///
    /// Unlike a pointer snapshot, the ids stay valid across mutation;
    /// lookups through them simply miss once the entity is gone.
    #[must_use]
    pub fn ids(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self.entities.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Iterates all live entities.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Iterates all live entities mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.values_mut()
    }

    /// Returns the number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if there are no live entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Destroys all entities unconditionally. Idempotent.
    ///
    /// Dropping the map cascades `on_destroy` through every entity; the
    /// same happens when the manager itself is dropped.
    pub fn clear(&mut self) {
        self.entities.clear();
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;
        id
    }
}
