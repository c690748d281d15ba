//! Integration tests for the component lifecycle contract.

use std::cell::RefCell;
use std::rc::Rc;

use parallax_foundation::{EntityId, Kind};
use parallax_world::{Component, Entity};

struct Crate;
impl Kind for Crate {}

/// Records every lifecycle hook invocation into a shared journal.
struct Journal {
    log: Rc<RefCell<Vec<String>>>,
    name: &'static str,
}

impl Component for Journal {
    fn on_attach(&mut self, owner: EntityId) {
        self.log
            .borrow_mut()
            .push(format!("{}:attach:{}", self.name, owner.raw()));
    }

    fn update(&mut self, _dt: f32) {
        self.log.borrow_mut().push(format!("{}:update", self.name));
    }

    fn on_destroy(&mut self) {
        self.log.borrow_mut().push(format!("{}:destroy", self.name));
    }
}

#[test]
fn attach_delivers_owner_id() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut e = Entity::of_kind::<Crate>(EntityId::new(7));
    e.add_component(Journal {
        log: Rc::clone(&log),
        name: "a",
    });

    assert_eq!(*log.borrow(), vec!["a:attach:7"]);
}

#[test]
fn replace_destroys_old_before_exposing_new() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut e = Entity::of_kind::<Crate>(EntityId::new(1));
    e.add_component(Journal {
        log: Rc::clone(&log),
        name: "old",
    });
    e.add_component(Journal {
        log: Rc::clone(&log),
        name: "new",
    });

    let entries = log.borrow();
    assert!(entries.contains(&"old:destroy".to_string()));
    // The new component was attached and never destroyed.
    assert!(entries.contains(&"new:attach:1".to_string()));
    assert!(!entries.contains(&"new:destroy".to_string()));
}

#[test]
fn every_teardown_path_destroys_exactly_once() {
    // Explicit removal.
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut e = Entity::of_kind::<Crate>(EntityId::new(1));
    e.add_component(Journal {
        log: Rc::clone(&log),
        name: "a",
    });
    e.remove_component::<Journal>();

    // Entity teardown, repeated.
    e.add_component(Journal {
        log: Rc::clone(&log),
        name: "b",
    });
    e.on_destroy();
    e.on_destroy();

    let destroys: Vec<_> = log
        .borrow()
        .iter()
        .filter(|entry| entry.ends_with(":destroy"))
        .cloned()
        .collect();
    assert_eq!(destroys, vec!["a:destroy", "b:destroy"]);
}

#[test]
fn update_reaches_all_components_each_tick() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut e = Entity::of_kind::<Crate>(EntityId::new(1));
    e.add_component(Journal {
        log: Rc::clone(&log),
        name: "a",
    });

    e.update(0.016);
    e.update(0.016);

    let updates = log
        .borrow()
        .iter()
        .filter(|entry| entry.ends_with(":update"))
        .count();
    assert_eq!(updates, 2);
}
