//! The multimethod handler table.
//!
//! N entity kinds need pairwise interaction logic (player picks up coin,
//! projectile damages enemy) without any one kind knowing about all the
//! others and without chains of kind checks scattered through gameplay
//! code. The table maps an *ordered* pair of kind tags to a handler;
//! symmetry is handled at lookup time by trying both orderings, which
//! preserves the registered parameter order for the callback.

use std::collections::HashMap;

use log::{trace, warn};
use parallax_foundation::{Kind, TypeTag};
use parallax_world::Entity;

type Handler = Box<dyn Fn(&mut Entity, &mut Entity)>;

/// Registry mapping ordered kind pairs to collision handlers.
///
/// Populated once at game-collision-setup time; consulted for every
/// overlapping pair the collision pass finds. A pair with no handler in
/// either order is not an error; most kind pairs have no interaction.
#[derive(Default)]
pub struct MultiMethodDispatcher {
    handlers: HashMap<(TypeTag, TypeTag), Handler>,
}

impl MultiMethodDispatcher {
    /// Creates an empty dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for collisions between kinds `A` and `B`.
    ///
    /// The handler's first parameter always receives the entity whose
    /// runtime kind is `A` and the second the entity whose kind is `B`,
    /// regardless of the order the collision was detected in.
    ///
    /// Registering a second handler for the same *ordered* pair overwrites
    /// the first (last registration wins); setup happens once at startup in
    /// a fixed, auditable order, so this is logged rather than reported.
    pub fn register<A, B>(&mut self, handler: impl Fn(&mut Entity, &mut Entity) + 'static)
    where
        A: Kind,
        B: Kind,
    {
        let key = (TypeTag::of::<A>(), TypeTag::of::<B>());
        if self.handlers.insert(key, Box::new(handler)).is_some() {
            warn!("overwriting collision handler for {:?} x {:?}", key.0, key.1);
        }
    }

    /// Resolves and executes the handler for a detected collision.
    ///
    /// Looks up `(a.tag(), b.tag())` first; if absent, looks up the
    /// reversed pair and invokes the handler with the arguments swapped, so
    /// the formal parameters always match the registered kind order.
    /// Returns whether a handler fired.
    pub fn dispatch(&self, a: &mut Entity, b: &mut Entity) -> bool {
        if let Some(handler) = self.handlers.get(&(a.tag(), b.tag())) {
            trace!("collision {:?} x {:?}", a.tag(), b.tag());
            handler(a, b);
            return true;
        }
        if let Some(handler) = self.handlers.get(&(b.tag(), a.tag())) {
            trace!("collision {:?} x {:?} (reversed)", b.tag(), a.tag());
            handler(b, a);
            return true;
        }
        false
    }

    /// Returns true if a handler is registered for `A` and `B` in either
    /// order.
    #[must_use]
    pub fn has_handler<A, B>(&self) -> bool
    where
        A: Kind,
        B: Kind,
    {
        let ab = (TypeTag::of::<A>(), TypeTag::of::<B>());
        let ba = (TypeTag::of::<B>(), TypeTag::of::<A>());
        self.handlers.contains_key(&ab) || self.handlers.contains_key(&ba)
    }

    /// Returns the number of registered handlers.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Removes all handlers (level transitions, table rebuilds).
    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}
