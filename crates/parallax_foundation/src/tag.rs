//! Entity kind identities.
//!
//! Gameplay code declares entity kinds as unit marker types implementing
//! [`Kind`]. A [`TypeTag`] is the runtime identity of such a kind: it is
//! what the collision dispatch table keys on, so any module can introduce
//! new kinds without touching a central enum.

use std::any::TypeId;
use std::fmt;

/// Marker trait for entity kinds.
///
/// Implement this on a unit struct per gameplay species:
///
/// ```
/// use parallax_foundation::{Kind, TypeTag};
///
/// struct Player;
/// impl Kind for Player {}
///
/// let tag = TypeTag::of::<Player>();
/// assert_eq!(tag, TypeTag::of::<Player>());
/// ```
pub trait Kind: 'static {}

/// Runtime identity of an entity kind.
///
/// Wraps the kind's [`TypeId`] with its type name for diagnostics. Tags
/// compare and hash by type identity only; two tags are equal exactly when
/// they were produced from the same [`Kind`] type.
#[derive(Copy, Clone)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// Returns the tag for a kind.
    #[must_use]
    pub fn of<K: Kind>() -> Self {
        Self {
            id: TypeId::of::<K>(),
            name: std::any::type_name::<K>(),
        }
    }

    /// Returns the kind's type name, for logging and debug output.
    ///
    /// The name is a best-effort diagnostic string; identity comparisons
    /// use the underlying [`TypeId`].
    #[must_use]
    pub fn name(self) -> &'static str {
        self.name
    }

    /// Returns true if this tag identifies kind `K`.
    #[must_use]
    pub fn is<K: Kind>(self) -> bool {
        self.id == TypeId::of::<K>()
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl std::hash::Hash for TypeTag {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Strip the module path, keep the bare kind name.
        let short = self.name.rsplit("::").next().unwrap_or(self.name);
        write!(f, "TypeTag({short})")
    }
}
