//! Integration tests for the pairwise collision pass.

use parallax_collision::{CollisionManager, DEFAULT_RADIUS, WIDE_RADIUS};
use parallax_foundation::{Kind, Vec2};
use parallax_world::{EntityManager, Transform};

struct Player;
impl Kind for Player {}

struct Coin;
impl Kind for Coin {}

struct Well;
impl Kind for Well {}

fn spawn_at<K: Kind>(entities: &mut EntityManager, position: Vec2) -> parallax_foundation::EntityId {
    let e = entities.spawn::<K>();
    e.add_component(Transform::at(position));
    e.id()
}

// =============================================================================
// Broad proximity test
// =============================================================================

#[test]
fn strict_boundary_semantics() {
    let mut manager = CollisionManager::new();
    manager
        .dispatcher_mut()
        .register::<Player, Coin>(|_, coin| coin.deactivate());

    // Exactly on the boundary: no collision.
    let mut entities = EntityManager::new();
    spawn_at::<Player>(&mut entities, Vec2::ZERO);
    let coin = spawn_at::<Coin>(&mut entities, Vec2::new(DEFAULT_RADIUS, 0.0));
    manager.check_collisions(&mut entities);
    assert!(entities.get(coin).unwrap().is_active());

    // One unit closer: collision.
    let mut entities = EntityManager::new();
    spawn_at::<Player>(&mut entities, Vec2::ZERO);
    let coin = spawn_at::<Coin>(&mut entities, Vec2::new(DEFAULT_RADIUS - 1.0, 0.0));
    manager.check_collisions(&mut entities);
    assert!(!entities.get(coin).unwrap().is_active());
}

#[test]
fn area_triggers_use_widened_radius() {
    let mut manager = CollisionManager::new();
    manager
        .dispatcher_mut()
        .register::<Player, Well>(|player, _| player.deactivate());
    manager.radii_mut().widen::<Well>();

    // Between the default and widened radii: only the widened kind
    // collides.
    let mut entities = EntityManager::new();
    let player = spawn_at::<Player>(&mut entities, Vec2::ZERO);
    spawn_at::<Well>(&mut entities, Vec2::new(WIDE_RADIUS - 1.0, 0.0));

    manager.check_collisions(&mut entities);
    assert!(!entities.get(player).unwrap().is_active());
}

#[test]
fn diagonal_distance_uses_euclidean_metric() {
    let mut manager = CollisionManager::new();
    manager
        .dispatcher_mut()
        .register::<Player, Coin>(|_, coin| coin.deactivate());

    // 80² + 80² = 12800 > 100², even though each axis is within range.
    let mut entities = EntityManager::new();
    spawn_at::<Player>(&mut entities, Vec2::ZERO);
    let coin = spawn_at::<Coin>(&mut entities, Vec2::new(80.0, 80.0));

    manager.check_collisions(&mut entities);
    assert!(entities.get(coin).unwrap().is_active());
}

// =============================================================================
// Pass policy
// =============================================================================

#[test]
fn stats_count_checks_and_processed_separately() {
    let mut manager = CollisionManager::new();
    manager
        .dispatcher_mut()
        .register::<Player, Coin>(|_, _| {});

    let mut entities = EntityManager::new();
    spawn_at::<Player>(&mut entities, Vec2::ZERO);
    spawn_at::<Coin>(&mut entities, Vec2::new(10.0, 0.0)); // overlapping
    spawn_at::<Coin>(&mut entities, Vec2::new(500.0, 0.0)); // far away

    manager.check_collisions(&mut entities);

    let stats = manager.stats();
    assert_eq!(stats.checks, 3); // all three unordered pairs examined
    assert_eq!(stats.processed, 1); // only the overlapping player/coin fired
}

#[test]
fn pass_mutates_nothing_without_handlers() {
    let mut manager = CollisionManager::new();

    let mut entities = EntityManager::new();
    for i in 0..5 {
        #[allow(clippy::cast_precision_loss)]
        spawn_at::<Coin>(&mut entities, Vec2::new(i as f32, 0.0));
    }

    manager.check_collisions(&mut entities);

    assert_eq!(entities.len(), 5);
    assert!(entities.iter().all(parallax_world::Entity::is_active));
    assert_eq!(manager.stats().processed, 0);
}
