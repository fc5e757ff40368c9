//! Control facade
//!
//! Name-addressed access to registered tooltips for code outside the
//! declarative tree. Every call forwards to the registry or to the handles'
//! own operations. Name-addressed calls return `None` for an unknown name and
//! otherwise `Some` of what the handles reported.

mod context;

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::content::Content;
use crate::element::ElementRef;
use crate::instance::{InstanceHandle, PointerEvent, TooltipEngine};
use crate::props::Props;
use crate::registry::{BulkOptions, Instances, Registry};

pub use context::TooltipContext;

#[derive(Clone)]
pub struct TooltipControl {
    registry: Rc<Registry>,
    engine: Rc<dyn TooltipEngine>,
}

impl TooltipControl {
    pub fn new(registry: Rc<Registry>, engine: Rc<dyn TooltipEngine>) -> Self {
        Self { registry, engine }
    }

    pub fn set_instance(&self, name: &str, handle: InstanceHandle) {
        self.registry.set_instance(name, handle);
    }

    pub fn get_instance(&self, name: &str) -> Option<Instances> {
        self.registry.get_instance(name)
    }

    pub fn get_instances(&self) -> BTreeMap<String, Instances> {
        self.registry.get_instances()
    }

    pub fn show(&self, name: &str) -> Option<bool> {
        self.for_each(name, |handle| handle.show())
    }

    pub fn hide(&self, name: &str) -> Option<bool> {
        self.for_each(name, |handle| handle.hide())
    }

    pub fn hide_with_interactivity(&self, name: &str, pointer: &PointerEvent) -> Option<bool> {
        self.for_each(name, |handle| handle.hide_with_interactivity(pointer))
    }

    pub fn disable(&self, name: &str) -> Option<bool> {
        self.for_each(name, |handle| handle.disable())
    }

    pub fn enable(&self, name: &str) -> Option<bool> {
        self.for_each(name, |handle| handle.enable())
    }

    pub fn set_props(&self, name: &str, partial: &Props) -> Option<bool> {
        self.for_each(name, |handle| handle.set_props(partial))
    }

    pub fn set_content(&self, name: &str, content: Content) -> Option<bool> {
        self.for_each(name, |handle| handle.set_content(content.clone()))
    }

    pub fn set_trigger_target(&self, name: &str, targets: &[ElementRef]) -> Option<bool> {
        self.for_each(name, |handle| handle.set_trigger_target(targets))
    }

    pub fn unmount(&self, name: &str) -> Option<bool> {
        self.for_each(name, |handle| handle.unmount())
    }

    pub fn clear_delay_timeouts(&self, name: &str) -> Option<bool> {
        self.for_each(name, |handle| handle.clear_delay_timeouts())
    }

    /// Destroy every handle under `name` and drop their entries; false on a lookup miss
    pub fn destroy(&self, name: &str) -> bool {
        self.for_each(name, |handle| {
            handle.clear_delay_timeouts();
            handle.destroy();
            self.registry.remove(name, handle)
        })
        .is_some()
    }

    /// Global defaults for instances created from now on
    pub fn set_default_props(&self, partial: &Props) {
        self.engine.set_default_props(partial);
    }

    pub fn show_all(&self, options: &BulkOptions) -> usize {
        self.registry.show_all(options)
    }

    pub fn hide_all(&self, options: &BulkOptions) -> usize {
        self.registry.hide_all(options)
    }

    // Lookup happens before any call so handles may unregister themselves.
    // `None` is a lookup miss; otherwise whether every handle accepted the call.
    fn for_each(
        &self,
        name: &str,
        mut apply: impl FnMut(&InstanceHandle) -> bool,
    ) -> Option<bool> {
        let Some(instances) = self.registry.get_instance(name) else {
            log::debug!("No tooltip registered as '{}'", name);
            return None;
        };
        let mut accepted = true;
        for handle in instances.iter() {
            accepted &= apply(handle);
        }
        Some(accepted)
    }
}

#[cfg(test)]
#[path = "control_tests.rs"]
mod control_tests;
