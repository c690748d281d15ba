//! Multimethod collision dispatch for Parallax.
//!
//! This crate provides:
//! - [`MultiMethodDispatcher`] - Kind-pair keyed handler table with
//!   symmetric double dispatch
//! - [`RadiusPolicy`] - Per-kind proximity radii for the broad test
//! - [`CollisionManager`] - The per-tick pairwise collision pass

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod dispatch;
mod manager;
mod radius;

pub use dispatch::MultiMethodDispatcher;
pub use manager::{CollisionManager, CollisionStats};
pub use radius::{DEFAULT_RADIUS, RadiusPolicy, WIDE_RADIUS};
