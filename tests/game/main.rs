//! Integration tests for Layer 3: Game
//!
//! End-to-end gameplay scenarios run through the session tick loop.

mod session;
