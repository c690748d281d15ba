//! The per-tick collision pass.

use log::debug;
use parallax_world::{EntityManager, Transform};

use crate::dispatch::MultiMethodDispatcher;
use crate::radius::RadiusPolicy;

/// Diagnostic counters for the collision pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CollisionStats {
    /// Spatial tests performed (pairs where both entities were live and
    /// active).
    pub checks: u64,
    /// Overlapping pairs for which a handler actually fired.
    pub processed: u64,
}

/// Drives the game-level collision check loop.
///
/// Each tick, every unordered pair of active entities gets a broad
/// proximity test (squared distance against the pair's kind radius); pairs
/// that overlap are handed to the multimethod dispatcher. The manager never
/// mutates entity state itself; all mutation happens inside registered
/// handlers.
///
/// The pass is O(n²) in active entity count. Active counts stay in the
/// tens, so a spatial partition would cost more than it saves.
#[derive(Default)]
pub struct CollisionManager {
    dispatcher: MultiMethodDispatcher,
    radii: RadiusPolicy,
    stats: CollisionStats,
}

impl CollisionManager {
    /// Creates a collision manager with an empty handler table and default
    /// radii.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collision manager around a pre-populated dispatcher and
    /// radius policy.
    #[must_use]
    pub fn with_table(dispatcher: MultiMethodDispatcher, radii: RadiusPolicy) -> Self {
        Self {
            dispatcher,
            radii,
            stats: CollisionStats::default(),
        }
    }

    /// Returns the handler table, for registration at setup time.
    pub fn dispatcher_mut(&mut self) -> &mut MultiMethodDispatcher {
        &mut self.dispatcher
    }

    /// Returns the handler table read-only.
    #[must_use]
    pub fn dispatcher(&self) -> &MultiMethodDispatcher {
        &self.dispatcher
    }

    /// Returns the radius policy, for per-kind widening at setup time.
    pub fn radii_mut(&mut self) -> &mut RadiusPolicy {
        &mut self.radii
    }

    /// Runs one full pairwise collision pass over the live entity set.
    ///
    /// For every unordered pair of entities that are both live and active:
    /// fetch positions from their [`Transform`]s (an entity without one
    /// cannot collide), compare squared distance against the pair's kind
    /// radius (strict less-than), and on overlap resolve and execute the
    /// registered handler.
    ///
    /// Handlers run to completion before the next pair is examined; a pair
    /// whose member was deactivated by an earlier handler in the same pass
    /// is skipped.
    pub fn check_collisions(&mut self, entities: &mut EntityManager) {
        let ids = entities.ids();
        let mut fired = 0u64;

        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                let (id_a, id_b) = (ids[i], ids[j]);

                let Some(a) = entities.get(id_a) else { continue };
                let Some(b) = entities.get(id_b) else { continue };
                if !a.is_active() || !b.is_active() {
                    continue;
                }
                self.stats.checks += 1;

                let Some(pos_a) = a.component::<Transform>().map(Transform::position) else {
                    continue;
                };
                let Some(pos_b) = b.component::<Transform>().map(Transform::position) else {
                    continue;
                };

                let distance_squared = pos_a.distance_squared(pos_b);
                if !self.radii.overlaps(a.tag(), b.tag(), distance_squared) {
                    continue;
                }

                if let Some((a, b)) = entities.get_pair_mut(id_a, id_b) {
                    if self.dispatcher.dispatch(a, b) {
                        self.stats.processed += 1;
                        fired += 1;
                    }
                }
            }
        }

        if fired > 0 {
            debug!("collision pass: {fired} handlers fired over {} entities", ids.len());
        }
    }

    /// Returns the running diagnostic counters.
    #[must_use]
    pub fn stats(&self) -> CollisionStats {
        self.stats
    }

    /// Resets the diagnostic counters to zero.
    pub fn reset_stats(&mut self) {
        self.stats = CollisionStats::default();
    }
}
