//! Gameplay layer for Parallax.
//!
//! This crate provides:
//! - [`kinds`] - The entity species the platformer knows about
//! - [`components`] - Gameplay components (score, health, collectibles)
//! - [`handlers`] - The interaction table wiring kinds together
//! - [`GameSession`] - The frame-driven tick loop owning the world

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod components;
pub mod handlers;
pub mod kinds;
mod session;

pub use session::{GameSession, TickOutcome};
