//! Integration tests for session-level behavior.

use parallax_foundation::Vec2;
use parallax_game::GameSession;
use parallax_game::components::{Collectible, Score};
use parallax_game::handlers::register_gameplay_handlers;
use parallax_game::kinds::{Coin, Player};
use parallax_world::Transform;

#[test]
fn movement_happens_before_the_collision_pass() {
    // The player starts out of range and walks into range within one tick,
    // so pickup requires update-then-collide ordering.
    let mut session = GameSession::new();
    let player = {
        let e = session.entities_mut().spawn::<Player>();
        e.add_component(Transform::new(
            Vec2::new(-150.0, 0.0),
            Vec2::new(100.0, 0.0),
        ));
        e.add_component(Score::new());
        e.id()
    };
    {
        let e = session.entities_mut().spawn::<Coin>();
        e.add_component(Transform::at(Vec2::ZERO));
        e.add_component(Collectible::new(5));
    }

    // One second of movement brings the player to -50, well within radius.
    session.tick(1.0);

    let score = session
        .entities()
        .get(player)
        .unwrap()
        .component::<Score>()
        .unwrap()
        .points();
    assert_eq!(score, 5);
}

#[test]
fn stats_accumulate_across_ticks() {
    let mut session = GameSession::new();
    {
        let e = session.entities_mut().spawn::<Player>();
        e.add_component(Transform::at(Vec2::ZERO));
    }
    {
        let e = session.entities_mut().spawn::<Player>();
        e.add_component(Transform::at(Vec2::new(500.0, 0.0)));
    }

    session.tick(0.016);
    session.tick(0.016);

    assert_eq!(session.collisions().stats().checks, 2);
}

#[test]
fn handler_table_can_be_rebuilt_between_levels() {
    let mut session = GameSession::new();
    let populated = session.collisions().dispatcher().handler_count();
    assert!(populated > 0);

    session.collisions_mut().dispatcher_mut().clear();
    assert_eq!(session.collisions().dispatcher().handler_count(), 0);

    register_gameplay_handlers(session.collisions_mut().dispatcher_mut());
    assert_eq!(session.collisions().dispatcher().handler_count(), populated);
}

#[test]
fn clearing_the_world_is_idempotent() {
    let mut session = GameSession::new();
    session.entities_mut().spawn::<Player>();
    session.entities_mut().spawn::<Coin>();

    session.entities_mut().clear();
    session.entities_mut().clear();

    assert!(session.entities().is_empty());
    let outcome = session.tick(0.016);
    assert!(outcome.events.is_empty());
    assert_eq!(outcome.removed, 0);
}
