//! Name-to-instance registry
//!
//! Shared by every binding of one session. A name may map to several
//! handles (the same markup repeated across a list), kept in creation order.
//! Bindings remove their own handle by identity, never by name alone.

mod instances;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;

use crate::instance::{InstanceHandle, same_instance};

pub use instances::Instances;

/// Prefix for generated names ("tippy-1", "tippy-2", ...)
pub const DEFAULT_NAME_PREFIX: &str = "tippy";

/// Options for `show_all` / `hide_all`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkOptions {
    /// Names left untouched by the bulk operation
    pub exclude: Vec<String>,
}

impl BulkOptions {
    pub fn excluding<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exclude: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn excludes(&self, name: &str) -> bool {
        self.exclude.iter().any(|excluded| excluded == name)
    }
}

pub struct Registry {
    entries: RefCell<BTreeMap<String, Vec<InstanceHandle>>>,
    prefix: String,
    next_auto: Cell<u64>,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_NAME_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            entries: RefCell::new(BTreeMap::new()),
            prefix: prefix.into(),
            next_auto: Cell::new(1),
        }
    }

    /// Generate a name not currently in use
    pub fn next_name(&self) -> String {
        loop {
            let n = self.next_auto.get();
            self.next_auto.set(n + 1);
            let name = format!("{}-{}", self.prefix, n);
            if !self.contains(&name) {
                return name;
            }
        }
    }

    /// Register `handle` under `name`, appending to any handles already there
    pub fn set_instance(&self, name: &str, handle: InstanceHandle) {
        let mut entries = self.entries.borrow_mut();
        let handles = entries.entry(name.to_string()).or_default();
        if handles.iter().any(|existing| same_instance(existing, &handle)) {
            return;
        }
        if !handles.is_empty() {
            log::debug!(
                "Name '{}' now shared by {} tooltips",
                name,
                handles.len() + 1
            );
        }
        handles.push(handle);
    }

    pub fn get_instance(&self, name: &str) -> Option<Instances> {
        let entries = self.entries.borrow();
        entries
            .get(name)
            .and_then(|handles| Instances::from_vec(handles.clone()))
    }

    /// Snapshot of every entry
    pub fn get_instances(&self) -> BTreeMap<String, Instances> {
        self.entries
            .borrow()
            .iter()
            .filter_map(|(name, handles)| {
                Instances::from_vec(handles.clone()).map(|instances| (name.clone(), instances))
            })
            .collect()
    }

    /// Remove exactly `handle` from `name`; siblings sharing the name stay
    pub fn remove(&self, name: &str, handle: &InstanceHandle) -> bool {
        let mut entries = self.entries.borrow_mut();
        let Some(handles) = entries.get_mut(name) else {
            return false;
        };

        let before = handles.len();
        handles.retain(|existing| !same_instance(existing, handle));
        let removed = handles.len() != before;
        if handles.is_empty() {
            entries.remove(name);
        }
        removed
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.borrow().contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }

    /// Total number of registered handles
    pub fn len(&self) -> usize {
        self.entries.borrow().values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Show every live handle not excluded; returns how many accepted
    pub fn show_all(&self, options: &BulkOptions) -> usize {
        self.apply_all(options, "show", |handle| handle.show())
    }

    /// Hide every live handle not excluded; returns how many accepted
    pub fn hide_all(&self, options: &BulkOptions) -> usize {
        self.apply_all(options, "hide", |handle| handle.hide())
    }

    /// Drop handles that are destroyed or whose reference element is gone
    pub fn collect_garbage(&self) -> usize {
        let mut entries = self.entries.borrow_mut();
        let mut collected = 0;

        entries.retain(|name, handles| {
            let before = handles.len();
            handles.retain(|handle| !handle.state().is_destroyed && handle.reference().is_some());
            let dropped = before - handles.len();
            if dropped > 0 {
                log::debug!("Collected {} stale tooltip(s) under '{}'", dropped, name);
            }
            collected += dropped;
            !handles.is_empty()
        });

        collected
    }

    // Operates on a copy so a handle call may re-enter the registry
    fn apply_all(
        &self,
        options: &BulkOptions,
        operation: &str,
        apply: impl Fn(&InstanceHandle) -> bool,
    ) -> usize {
        let mut applied = 0;
        for (name, handle) in self.snapshot() {
            if options.excludes(&name) {
                continue;
            }
            if handle.state().is_destroyed {
                log::debug!("Skipping {} for destroyed tooltip under '{}'", operation, name);
                continue;
            }
            if apply(&handle) {
                applied += 1;
            }
        }
        applied
    }

    fn snapshot(&self) -> Vec<(String, InstanceHandle)> {
        self.entries
            .borrow()
            .iter()
            .flat_map(|(name, handles)| {
                handles
                    .iter()
                    .map(move |handle| (name.clone(), handle.clone()))
            })
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("prefix", &self.prefix)
            .field("entries", &self.get_instances())
            .finish()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
