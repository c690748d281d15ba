//! Entity species.
//!
//! Each kind is a unit marker implementing [`Kind`]; the dispatch table
//! keys on these. New species can be declared anywhere without touching
//! anything central.

use parallax_foundation::Kind;

/// The player avatar.
pub struct Player;
impl Kind for Player {}

/// A walking enemy.
pub struct Enemy;
impl Kind for Enemy {}

/// A projectile fired by the player.
pub struct Projectile;
impl Kind for Projectile {}

/// A collectible coin.
pub struct Coin;
impl Kind for Coin {}

/// The end-of-level flag.
pub struct Flag;
impl Kind for Flag {}

/// A well that transports the player to another level. Area trigger:
/// collides at the widened radius.
pub struct Well;
impl Kind for Well {}

/// Lethal water tiles. Area trigger: collides at the widened radius.
pub struct Sea;
impl Kind for Sea {}
