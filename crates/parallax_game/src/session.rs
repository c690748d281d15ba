//! The frame-driven game session.
//!
//! Owns the entity manager and the collision manager, and exposes the one
//! entry point the outer game loop calls per frame. Nothing here is
//! global: subsystems that need the session get handed one.

use log::debug;
use parallax_collision::CollisionManager;
use parallax_foundation::EntityId;
use parallax_world::EntityManager;

use crate::components::{GameEvent, Lifetime, PendingTransition};
use crate::handlers::{configure_radii, register_gameplay_handlers};

/// What one tick produced, for the outer loop to act on.
#[derive(Debug, Default)]
pub struct TickOutcome {
    /// Session-level events drained from collision handlers, with the
    /// entity that produced each.
    pub events: Vec<(EntityId, GameEvent)>,
    /// Number of entities reclaimed by the end-of-tick sweep.
    pub removed: usize,
}

/// A running game level: world state plus collision machinery.
pub struct GameSession {
    entities: EntityManager,
    collisions: CollisionManager,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a session with the full gameplay interaction table and
    /// area-trigger radii installed.
    #[must_use]
    pub fn new() -> Self {
        let mut collisions = CollisionManager::new();
        register_gameplay_handlers(collisions.dispatcher_mut());
        configure_radii(collisions.radii_mut());
        Self {
            entities: EntityManager::new(),
            collisions,
        }
    }

    /// Creates a session with an empty interaction table, for tests that
    /// install their own handlers.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            entities: EntityManager::new(),
            collisions: CollisionManager::new(),
        }
    }

    /// Returns the entity manager.
    #[must_use]
    pub fn entities(&self) -> &EntityManager {
        &self.entities
    }

    /// Returns the entity manager mutably, for spawning and level setup.
    pub fn entities_mut(&mut self) -> &mut EntityManager {
        &mut self.entities
    }

    /// Returns the collision manager.
    #[must_use]
    pub fn collisions(&self) -> &CollisionManager {
        &self.collisions
    }

    /// Returns the collision manager mutably.
    pub fn collisions_mut(&mut self) -> &mut CollisionManager {
        &mut self.collisions
    }

    /// Advances the simulation by one frame.
    ///
    /// `dt` is clamped to non-negative seconds. The tick runs in fixed
    /// order: update all active entities, expire finished lifetimes, run
    /// the collision pass, drain transition events, sweep inactive
    /// entities.
    pub fn tick(&mut self, dt: f32) -> TickOutcome {
        let dt = dt.max(0.0);

        self.entities.update_all(dt);
        self.expire_lifetimes();
        self.collisions.check_collisions(&mut self.entities);
        let events = self.drain_transitions();
        let removed = self.entities.remove_inactive();

        if !events.is_empty() {
            debug!("tick produced {} events", events.len());
        }
        TickOutcome { events, removed }
    }

    /// Deactivates every active entity whose [`Lifetime`] has run out.
    fn expire_lifetimes(&mut self) {
        for entity in self.entities.iter_mut() {
            if entity.is_active()
                && entity
                    .component::<Lifetime>()
                    .is_some_and(Lifetime::is_expired)
            {
                entity.deactivate();
            }
        }
    }

    /// Collects and removes every pending transition component.
    fn drain_transitions(&mut self) -> Vec<(EntityId, GameEvent)> {
        let mut events = Vec::new();
        for entity in self.entities.iter_mut() {
            if let Some(pending) = entity.component::<PendingTransition>() {
                events.push((entity.id(), pending.event()));
                entity.remove_component::<PendingTransition>();
            }
        }
        events
    }
}
