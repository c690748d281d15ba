//! Scripted demo: a player walks right across a tiny level, collecting
//! coins and finally stepping into a well.
//!
//! Run with: `RUST_LOG=debug cargo run --bin parallax-demo`

use log::info;
use parallax_foundation::Vec2;
use parallax_game::components::{Collectible, GameEvent, Health, Score};
use parallax_game::kinds::{Coin, Player, Well};
use parallax_game::GameSession;
use parallax_world::Transform;

fn main() {
    env_logger::init();

    let mut session = GameSession::new();

    let player = {
        let e = session.entities_mut().spawn::<Player>();
        e.add_component(Transform::new(Vec2::ZERO, Vec2::new(200.0, 0.0)));
        e.add_component(Score::new());
        e.add_component(Health::new(3));
        e.id()
    };

    for x in [300.0, 600.0, 900.0] {
        let e = session.entities_mut().spawn::<Coin>();
        e.add_component(Transform::at(Vec2::new(x, 0.0)));
        e.add_component(Collectible::new(10));
    }

    {
        let e = session.entities_mut().spawn::<Well>();
        e.add_component(Transform::at(Vec2::new(1400.0, 0.0)));
    }

    // Fixed 60 Hz ticks until the well fires or we give up.
    let dt = 1.0 / 60.0;
    for frame in 0..600 {
        let outcome = session.tick(dt);
        for (entity, event) in &outcome.events {
            info!("frame {frame}: {entity} -> {event:?}");
            if *event == GameEvent::EnteredWell {
                let score = session
                    .entities()
                    .get(player)
                    .and_then(|e| e.component::<Score>())
                    .map_or(0, Score::points);
                let stats = session.collisions().stats();
                info!(
                    "level done: score {score}, {} checks, {} collisions",
                    stats.checks, stats.processed
                );
                return;
            }
        }
    }
    info!("player never reached the well");
}
