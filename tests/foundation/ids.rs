//! Integration tests for entity identifiers.

use parallax_foundation::EntityId;

#[test]
fn ids_are_ordered_by_raw_value() {
    let ids: Vec<_> = (0..10).map(EntityId::new).collect();
    for window in ids.windows(2) {
        assert!(window[0] < window[1]);
    }
}

#[test]
fn null_id_is_distinguishable() {
    let null = EntityId::null();
    assert!(null.is_null());
    assert_ne!(null, EntityId::new(0));
}

#[test]
fn ids_work_as_map_keys() {
    use std::collections::HashMap;

    let mut map = HashMap::new();
    map.insert(EntityId::new(1), "player");
    map.insert(EntityId::new(2), "coin");

    assert_eq!(map.get(&EntityId::new(1)), Some(&"player"));
    assert_eq!(map.get(&EntityId::new(3)), None);
}
