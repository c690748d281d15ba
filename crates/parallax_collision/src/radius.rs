//! Per-kind collision radii for the broad proximity test.

use std::collections::HashMap;

use parallax_foundation::{Kind, TypeTag};

/// Point-proximity radius in pixels for ordinary entities.
pub const DEFAULT_RADIUS: f32 = 100.0;

/// Widened radius in pixels for area triggers (wells, hazard tiles) that
/// occupy a full tile rather than a point.
pub const WIDE_RADIUS: f32 = 150.0;

/// Maps entity kinds to the radius the proximity test uses for them.
///
/// Kinds without an override use [`DEFAULT_RADIUS`]. The effective radius
/// for a pair is the larger of the two kinds' radii, so an area trigger
/// keeps its generous trigger volume against any partner.
#[derive(Debug, Clone)]
pub struct RadiusPolicy {
    default_radius: f32,
    overrides: HashMap<TypeTag, f32>,
}

impl Default for RadiusPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl RadiusPolicy {
    /// Creates a policy with the standard default radius and no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_radius: DEFAULT_RADIUS,
            overrides: HashMap::new(),
        }
    }

    /// Creates a policy with a custom default radius.
    #[must_use]
    pub fn with_default(default_radius: f32) -> Self {
        Self {
            default_radius,
            overrides: HashMap::new(),
        }
    }

    /// Registers kind `K` as an area trigger at [`WIDE_RADIUS`].
    pub fn widen<K: Kind>(&mut self) {
        self.overrides.insert(TypeTag::of::<K>(), WIDE_RADIUS);
    }

    /// Sets an explicit radius for kind `K`.
    pub fn set_radius<K: Kind>(&mut self, radius: f32) {
        self.overrides.insert(TypeTag::of::<K>(), radius);
    }

    /// Returns the radius for a kind tag.
    #[must_use]
    pub fn radius(&self, tag: TypeTag) -> f32 {
        self.overrides.get(&tag).copied().unwrap_or(self.default_radius)
    }

    /// Returns the effective radius for a pair: the larger of the two.
    #[must_use]
    pub fn pair_radius(&self, a: TypeTag, b: TypeTag) -> f32 {
        self.radius(a).max(self.radius(b))
    }

    /// Overlap test: strictly inside the pair radius.
    ///
    /// A pair exactly on the boundary (`distance² == radius²`) does *not*
    /// collide.
    #[must_use]
    pub fn overlaps(&self, a: TypeTag, b: TypeTag, distance_squared: f32) -> bool {
        let radius = self.pair_radius(a, b);
        distance_squared < radius * radius
    }
}
