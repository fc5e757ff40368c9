//! Tests for registry

use std::cell::Cell;
use std::rc::{Rc, Weak};

use super::*;
use crate::content::Content;
use crate::element::{ElementRef, HostElement};
use crate::engine::HeadlessEngine;
use crate::instance::{InstanceId, InstanceState, Lifecycle, PointerEvent, TooltipInstance};
use crate::props::Props;
use crate::test_utils::test_helpers::{button, create_handle};

#[test]
fn test_lookup_miss_is_none() {
    let registry = Registry::new();
    assert!(registry.get_instance("missing").is_none());
    assert!(registry.is_empty());
}

#[test]
fn test_set_and_get_single() {
    let engine = HeadlessEngine::new();
    let registry = Registry::new();
    let handle = create_handle(&engine, &button("a"));

    registry.set_instance("save", handle.clone());

    let found = registry.get_instance("save").unwrap();
    assert!(matches!(found, Instances::One(_)));
    assert!(found.contains(&handle));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_duplicate_names_keep_multiplicity_in_order() {
    let engine = HeadlessEngine::new();
    let registry = Registry::new();
    let first = create_handle(&engine, &button("a"));
    let second = create_handle(&engine, &button("b"));

    registry.set_instance("row", first.clone());
    registry.set_instance("row", second.clone());

    let found = registry.get_instance("row").unwrap();
    assert_eq!(found.len(), 2);
    let ids: Vec<InstanceId> = found.iter().map(|h| h.id()).collect();
    assert_eq!(ids, vec![first.id(), second.id()]);
    assert_eq!(found.first().map(|h| h.id()), Some(first.id()));
}

#[test]
fn test_setting_same_handle_twice_is_idempotent() {
    let engine = HeadlessEngine::new();
    let registry = Registry::new();
    let handle = create_handle(&engine, &button("a"));

    registry.set_instance("save", handle.clone());
    registry.set_instance("save", handle);

    assert_eq!(registry.len(), 1);
}

#[test]
fn test_remove_by_identity_keeps_sibling() {
    let engine = HeadlessEngine::new();
    let registry = Registry::new();
    let first = create_handle(&engine, &button("a"));
    let second = create_handle(&engine, &button("b"));
    registry.set_instance("row", first.clone());
    registry.set_instance("row", second.clone());

    assert!(registry.remove("row", &first));
    assert!(!registry.remove("row", &first));

    let remaining = registry.get_instance("row").unwrap();
    assert_eq!(remaining.len(), 1);
    assert!(remaining.contains(&second));

    assert!(registry.remove("row", &second));
    assert!(!registry.contains("row"));
}

#[test]
fn test_remove_unknown_name() {
    let engine = HeadlessEngine::new();
    let registry = Registry::new();
    let handle = create_handle(&engine, &button("a"));
    assert!(!registry.remove("nope", &handle));
}

#[test]
fn test_get_instances_snapshot() {
    let engine = HeadlessEngine::new();
    let registry = Registry::new();
    registry.set_instance("a", create_handle(&engine, &button("a")));
    registry.set_instance("b", create_handle(&engine, &button("b")));
    registry.set_instance("b", create_handle(&engine, &button("c")));

    let snapshot = registry.get_instances();

    assert_eq!(snapshot.keys().cloned().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(snapshot["a"].len(), 1);
    assert_eq!(snapshot["b"].len(), 2);
    assert_eq!(registry.names(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_next_name_is_counter_based_and_unique() {
    let engine = HeadlessEngine::new();
    let registry = Registry::new();
    registry.set_instance("tippy-2", create_handle(&engine, &button("a")));

    assert_eq!(registry.next_name(), "tippy-1");
    assert_eq!(registry.next_name(), "tippy-3");
}

#[test]
fn test_custom_prefix() {
    let registry = Registry::with_prefix("hint");
    assert_eq!(registry.next_name(), "hint-1");
}

#[test]
fn test_hide_all_honours_exclude() {
    let engine = HeadlessEngine::new();
    let registry = Registry::new();
    let hosts = [button("x"), button("y"), button("z")];
    let x = create_handle(&engine, &hosts[0]);
    let y = create_handle(&engine, &hosts[1]);
    let z = create_handle(&engine, &hosts[2]);
    registry.set_instance("x", x.clone());
    registry.set_instance("y", y.clone());
    registry.set_instance("z", z.clone());

    assert_eq!(registry.show_all(&BulkOptions::default()), 3);
    let hidden = registry.hide_all(&BulkOptions::excluding(["x"]));

    assert_eq!(hidden, 2);
    assert_eq!(x.state().lifecycle(), Lifecycle::Shown);
    assert_eq!(y.state().lifecycle(), Lifecycle::Hidden);
    assert_eq!(z.state().lifecycle(), Lifecycle::Hidden);
}

#[test]
fn test_bulk_skips_destroyed_and_continues() {
    let engine = HeadlessEngine::new();
    let registry = Registry::new();
    let hosts = [button("a"), button("b")];
    let dead = create_handle(&engine, &hosts[0]);
    let live = create_handle(&engine, &hosts[1]);
    registry.set_instance("a", dead.clone());
    registry.set_instance("b", live.clone());
    dead.destroy();

    assert_eq!(registry.show_all(&BulkOptions::default()), 1);
    assert!(live.state().is_visible);
}

#[test]
fn test_collect_garbage_drops_destroyed_and_orphaned() {
    let engine = HeadlessEngine::new();
    let registry = Registry::new();
    let kept_host = button("kept");
    let kept = create_handle(&engine, &kept_host);
    let destroyed = create_handle(&engine, &button("destroyed"));
    let orphan_host = button("orphan");
    let orphan = create_handle(&engine, &orphan_host);
    registry.set_instance("kept", kept);
    registry.set_instance("destroyed", destroyed.clone());
    registry.set_instance("orphan", orphan);
    destroyed.destroy();
    drop(orphan_host);

    assert_eq!(registry.collect_garbage(), 2);
    assert_eq!(registry.names(), vec!["kept".to_string()]);
    assert_eq!(registry.collect_garbage(), 0);
}

/// Handle whose `hide` tears itself down and unregisters, like a binding
/// reacting to a hide mid-iteration
struct SelfRemoving {
    id: InstanceId,
    name: String,
    me: Weak<SelfRemoving>,
    registry: Rc<Registry>,
    destroyed: Cell<bool>,
    reference: ElementRef,
}

impl TooltipInstance for SelfRemoving {
    fn id(&self) -> InstanceId {
        self.id
    }
    fn reference(&self) -> Option<ElementRef> {
        Some(self.reference.clone())
    }
    fn state(&self) -> InstanceState {
        InstanceState {
            is_destroyed: self.destroyed.get(),
            ..InstanceState::new()
        }
    }
    fn props(&self) -> Props {
        Props::default()
    }
    fn show(&self) -> bool {
        !self.destroyed.get()
    }
    fn hide(&self) -> bool {
        self.destroy();
        if let Some(me) = self.me.upgrade() {
            let handle: InstanceHandle = me;
            self.registry.remove(&self.name, &handle);
        }
        true
    }
    fn hide_with_interactivity(&self, _pointer: &PointerEvent) -> bool {
        self.hide()
    }
    fn enable(&self) -> bool {
        false
    }
    fn disable(&self) -> bool {
        false
    }
    fn set_props(&self, _partial: &Props) -> bool {
        false
    }
    fn set_content(&self, _content: Content) -> bool {
        false
    }
    fn set_trigger_target(&self, _targets: &[ElementRef]) -> bool {
        false
    }
    fn unmount(&self) -> bool {
        false
    }
    fn clear_delay_timeouts(&self) -> bool {
        false
    }
    fn destroy(&self) {
        self.destroyed.set(true);
    }
}

#[test]
fn test_hide_all_tolerates_entries_removed_mid_iteration() {
    let registry = Rc::new(Registry::new());
    let host = HostElement::new("li");
    for (n, name) in ["a", "a", "b"].iter().enumerate() {
        let instance = Rc::new_cyclic(|me: &Weak<SelfRemoving>| SelfRemoving {
            id: InstanceId(n as u64 + 100),
            name: name.to_string(),
            me: me.clone(),
            registry: registry.clone(),
            destroyed: Cell::new(false),
            reference: host.clone(),
        });
        let handle: InstanceHandle = instance;
        registry.set_instance(name, handle);
    }

    assert_eq!(registry.hide_all(&BulkOptions::default()), 3);
    assert!(registry.is_empty());
}

#[test]
fn test_bulk_options_excludes() {
    let options = BulkOptions::excluding(vec!["x".to_string(), "y".to_string()]);
    assert!(options.excludes("x"));
    assert!(options.excludes("y"));
    assert!(!options.excludes("z"));
    assert!(!BulkOptions::default().excludes("x"));
}
