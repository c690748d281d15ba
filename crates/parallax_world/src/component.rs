//! The component contract.
//!
//! A component is one facet of an entity's data or behavior (transform,
//! health, score, a physics body handle, ...). An entity owns at most one
//! component per concrete type; the component holds only a weak
//! back-reference to its owner in the form of an [`EntityId`].

use std::any::Any;

use parallax_foundation::EntityId;

/// Upcast helper so boxed components can be downcast to concrete types.
///
/// Blanket-implemented for every `'static` type; component impls never need
/// to write this themselves.
pub trait AsAny: Any {
    /// Returns self as a `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns self as a `&mut dyn Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// An attachable unit of per-entity data and behavior.
///
/// All hooks have no-op defaults; a plain data component implements none of
/// them:
///
/// ```
/// use parallax_world::Component;
///
/// struct Score(u32);
/// impl Component for Score {}
/// ```
///
/// # Lifecycle
///
/// - `on_attach` fires once when the component is stored on an entity,
///   delivering the owner's id. Replacing a component of the same concrete
///   type destroys the old instance first.
/// - `update` fires once per simulation tick for every component of every
///   active entity, with the frame delta in seconds.
/// - `on_destroy` fires exactly once before teardown, whether the component
///   was removed, replaced, or its owner destroyed. It must not panic; the
///   order across a dying entity's components is unspecified.
pub trait Component: AsAny {
    /// Called when the component is attached to its owning entity.
    fn on_attach(&mut self, owner: EntityId) {
        let _ = owner;
    }

    /// Called once per simulation tick with the frame delta in seconds.
    fn update(&mut self, dt: f32) {
        let _ = dt;
    }

    /// Called exactly once before the component is torn down.
    ///
    /// This is the hook for releasing external resources (a physics body,
    /// an audio voice). Must not panic.
    fn on_destroy(&mut self) {}
}
