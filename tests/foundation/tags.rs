//! Integration tests for kind tags.
//!
//! Kinds declared in different modules must interoperate as dispatch keys
//! without any central registry.

use parallax_foundation::{Kind, TypeTag};

mod gameplay {
    use super::Kind;

    pub struct Player;
    impl Kind for Player {}
}

mod level {
    use super::Kind;

    pub struct Well;
    impl Kind for Well {}
}

#[test]
fn kinds_from_different_modules_have_distinct_tags() {
    assert_ne!(
        TypeTag::of::<gameplay::Player>(),
        TypeTag::of::<level::Well>()
    );
}

#[test]
fn tag_identity_is_stable_across_call_sites() {
    fn tag_from_elsewhere() -> TypeTag {
        TypeTag::of::<gameplay::Player>()
    }

    assert_eq!(TypeTag::of::<gameplay::Player>(), tag_from_elsewhere());
}

#[test]
fn ordered_pairs_are_order_sensitive_keys() {
    use std::collections::HashMap;

    let player = TypeTag::of::<gameplay::Player>();
    let well = TypeTag::of::<level::Well>();

    let mut table = HashMap::new();
    table.insert((player, well), "enter");

    assert!(table.contains_key(&(player, well)));
    assert!(!table.contains_key(&(well, player)));
}
