//! Core types for the Parallax entity-component runtime.
//!
//! This crate provides:
//! - [`EntityId`] - Unique, monotonically assigned entity identifiers
//! - [`Kind`] / [`TypeTag`] - Open, per-module entity kind identities
//! - [`Vec2`] - The minimal 2D math the collision pass needs
//! - [`Error`] - Structured error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod entity;
mod error;
mod math;
mod tag;

pub use entity::EntityId;
pub use error::{Error, ErrorKind, Result};
pub use math::Vec2;
pub use tag::{Kind, TypeTag};
