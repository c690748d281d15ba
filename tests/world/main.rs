//! Integration tests for Layer 1: World
//!
//! Tests for the component contract, the entity container, and the entity
//! manager.

mod components;
