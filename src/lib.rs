//! Parallax - Entity-component runtime with multimethod collision dispatch
//!
//! This crate re-exports all layers of the Parallax core for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: parallax_game       - Gameplay kinds, components, handlers, session
//! Layer 2: parallax_collision  - Multimethod dispatch, radii, collision pass
//! Layer 1: parallax_world      - Component trait, Entity, EntityManager
//! Layer 0: parallax_foundation - Core types (EntityId, TypeTag, Vec2, Error)
//! ```

pub use parallax_collision as collision;
pub use parallax_foundation as foundation;
pub use parallax_game as game;
pub use parallax_world as world;
