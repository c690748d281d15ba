//! Entity and component storage for Parallax.
//!
//! This crate provides:
//! - [`Component`] - The attachable unit of per-entity data and behavior
//! - [`Entity`] - A type-keyed, exclusively-owning component container
//! - [`EntityManager`] - The authoritative id-to-entity map
//! - [`Transform`] - The spatial-provider component the collision pass reads

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod component;
mod entity;
mod manager;
mod transform;

pub use component::{AsAny, Component};
pub use entity::Entity;
pub use manager::EntityManager;
pub use transform::Transform;
