//! Gameplay components.

use parallax_world::Component;

/// Accumulated score, carried by the player.
#[derive(Debug, Default)]
pub struct Score {
    points: u32,
}

impl Score {
    /// Creates a score starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds points.
    pub fn add(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }

    /// Returns the current total.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }
}

impl Component for Score {}

/// Hit points.
#[derive(Debug)]
pub struct Health {
    current: u32,
    max: u32,
}

impl Health {
    /// Creates health at full.
    #[must_use]
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Applies damage, saturating at zero.
    pub fn damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Restores hit points, capped at the maximum.
    pub fn heal(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.max);
    }

    /// Drops straight to zero (lethal hazards).
    pub fn kill(&mut self) {
        self.current = 0;
    }

    /// Returns the current hit points.
    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Returns true once hit points reach zero.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.current == 0
    }
}

impl Component for Health {}

/// Something the player can pick up.
#[derive(Debug)]
pub struct Collectible {
    value: u32,
    collected: bool,
}

impl Collectible {
    /// Creates a collectible worth the given points.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self {
            value,
            collected: false,
        }
    }

    /// Returns this collectible's point value.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Returns true if already picked up.
    #[must_use]
    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Marks the collectible as picked up; returns its value.
    ///
    /// Collecting twice yields zero, so a coin can never be double-scored.
    pub fn collect(&mut self) -> u32 {
        if self.collected {
            return 0;
        }
        self.collected = true;
        self.value
    }
}

impl Component for Collectible {}

/// Contact damage dealt by the owner.
#[derive(Debug)]
pub struct Damage {
    /// Hit points removed per contact.
    pub amount: u32,
}

impl Damage {
    /// Creates a contact-damage component.
    #[must_use]
    pub fn new(amount: u32) -> Self {
        Self { amount }
    }
}

impl Component for Damage {}

/// Countdown that expires the owner after a fixed time (projectiles).
///
/// The component only tracks time; the session deactivates owners whose
/// lifetime has expired, since a component cannot reach its entity.
#[derive(Debug)]
pub struct Lifetime {
    remaining: f32,
}

impl Lifetime {
    /// Creates a lifetime of the given duration in seconds.
    #[must_use]
    pub fn new(seconds: f32) -> Self {
        Self { remaining: seconds }
    }

    /// Returns true once the countdown has run out.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }
}

impl Component for Lifetime {
    fn update(&mut self, dt: f32) {
        self.remaining -= dt;
    }
}

/// A session-level event produced by a collision handler.
///
/// Handlers can only mutate the two entities they are given; anything that
/// concerns the session (level transitions, player death) is expressed by
/// attaching a [`PendingTransition`] that the session drains after the
/// collision pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// The player entered a well leading to another level.
    EnteredWell,
    /// The player reached the end-of-level flag.
    LevelComplete,
    /// The player's health reached zero.
    PlayerDied,
}

/// Carrier component for a [`GameEvent`] awaiting the session.
#[derive(Debug)]
pub struct PendingTransition {
    event: GameEvent,
}

impl PendingTransition {
    /// Wraps an event for the session to drain.
    #[must_use]
    pub fn new(event: GameEvent) -> Self {
        Self { event }
    }

    /// Returns the pending event.
    #[must_use]
    pub fn event(&self) -> GameEvent {
        self.event
    }
}

impl Component for PendingTransition {}
