//! The interaction table.
//!
//! This is the single place where game rules live: one setup function that
//! registers a handler for every gameplay interaction pair, and one that
//! widens the radii of area-trigger kinds. The dispatch mechanism itself
//! knows nothing about any of these rules.

use parallax_collision::{MultiMethodDispatcher, RadiusPolicy};

use crate::components::{
    Collectible, Damage, GameEvent, Health, PendingTransition, Score,
};
use crate::kinds::{Coin, Enemy, Flag, Player, Projectile, Sea, Well};

/// Registers a handler for every gameplay interaction pair.
///
/// Called once at startup (and again after a
/// [`clear`](MultiMethodDispatcher::clear) between levels).
pub fn register_gameplay_handlers(dispatcher: &mut MultiMethodDispatcher) {
    // Player picks up a coin: score its value, despawn it.
    dispatcher.register::<Player, Coin>(|player, coin| {
        let Some(collectible) = coin.component_mut::<Collectible>() else {
            return;
        };
        let value = collectible.collect();
        if value == 0 {
            return;
        }
        coin.deactivate();
        if let Some(score) = player.component_mut::<Score>() {
            score.add(value);
        }
    });

    // Projectile hits an enemy: apply its damage, spend the projectile.
    dispatcher.register::<Projectile, Enemy>(|projectile, enemy| {
        let amount = projectile
            .component::<Damage>()
            .map_or(0, |damage| damage.amount);
        projectile.deactivate();

        if let Some(health) = enemy.component_mut::<Health>() {
            health.damage(amount);
            if health.is_dead() {
                enemy.deactivate();
            }
        }
    });

    // Enemy touches the player: contact damage. Transitions are
    // first-event-wins within a pass, same as the trigger handlers below.
    dispatcher.register::<Enemy, Player>(|enemy, player| {
        let amount = enemy
            .component::<Damage>()
            .map_or(0, |damage| damage.amount);
        if let Some(health) = player.component_mut::<Health>() {
            health.damage(amount);
            if health.is_dead() {
                player.deactivate();
                if !player.has_component::<PendingTransition>() {
                    player.add_component(PendingTransition::new(GameEvent::PlayerDied));
                }
            }
        }
    });

    // Player steps into a well: hand the transition to the session.
    dispatcher.register::<Player, Well>(|player, _well| {
        if !player.has_component::<PendingTransition>() {
            player.add_component(PendingTransition::new(GameEvent::EnteredWell));
        }
    });

    // Player reaches the flag: level complete.
    dispatcher.register::<Player, Flag>(|player, _flag| {
        if !player.has_component::<PendingTransition>() {
            player.add_component(PendingTransition::new(GameEvent::LevelComplete));
        }
    });

    // Player falls into the sea: lethal.
    dispatcher.register::<Player, Sea>(|player, _sea| {
        if let Some(health) = player.component_mut::<Health>() {
            health.kill();
        }
        player.deactivate();
        if !player.has_component::<PendingTransition>() {
            player.add_component(PendingTransition::new(GameEvent::PlayerDied));
        }
    });
}

/// Widens the proximity radii for kinds that act as area triggers.
pub fn configure_radii(radii: &mut RadiusPolicy) {
    radii.widen::<Well>();
    radii.widen::<Sea>();
}
