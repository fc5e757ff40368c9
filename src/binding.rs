//! Per-element binding
//!
//! Synchronizes a host element's declarative inputs with one imperative
//! tooltip instance. The host framework drives the transitions:
//!
//! ```text
//! Unattached -> Attaching -> Attached -> Detaching -> Detached
//!      ^            |
//!      +-- failure -+
//! ```
//!
//! Teardown always runs `clear_delay_timeouts`, then `destroy`, then removes
//! the registry entry, so no pending timer can fire against a dead target.

mod inputs;

use std::rc::Rc;

use crate::content::{ContentResolver, ContentSource};
use crate::element::ElementRef;
use crate::error::BindError;
use crate::instance::{CreateRequest, InstanceHandle, TooltipEngine, split_class_names};
use crate::props::Props;
use crate::registry::Registry;

pub use inputs::BindingInputs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingPhase {
    Unattached,
    Attaching,
    Attached,
    Detaching,
    Detached,
}

pub struct TooltipBinding {
    host: ElementRef,
    registry: Rc<Registry>,
    engine: Rc<dyn TooltipEngine>,
    inputs: BindingInputs,
    phase: BindingPhase,
    name: Option<String>,
    handle: Option<InstanceHandle>,
    resolver: ContentResolver,
}

impl TooltipBinding {
    pub fn new(
        host: ElementRef,
        inputs: BindingInputs,
        registry: Rc<Registry>,
        engine: Rc<dyn TooltipEngine>,
    ) -> Self {
        Self {
            host,
            registry,
            engine,
            inputs,
            phase: BindingPhase::Unattached,
            name: None,
            handle: None,
            resolver: ContentResolver::default(),
        }
    }

    pub fn phase(&self) -> BindingPhase {
        self.phase
    }

    pub fn host(&self) -> &ElementRef {
        &self.host
    }

    /// Resolved registry name, once attached
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn handle(&self) -> Option<&InstanceHandle> {
        self.handle.as_ref()
    }

    pub fn inputs(&self) -> &BindingInputs {
        &self.inputs
    }

    pub fn content_source(&self) -> Option<&ContentSource> {
        self.resolver.source()
    }

    /// Create the instance and register it
    ///
    /// On failure the binding stays `Unattached` and may be retried.
    pub fn attach(&mut self) -> Result<(), BindError> {
        if self.phase != BindingPhase::Unattached {
            return Err(BindError::InvalidPhase(self.phase));
        }
        self.phase = BindingPhase::Attaching;

        let name = match self.inputs.explicit_name() {
            Some(name) => name.to_string(),
            None => self.registry.next_name(),
        };

        let mut props = self.engine.default_props();
        props.merge(&self.inputs.props);

        let mut resolver = ContentResolver::new(self.inputs.template.clone());
        let content = resolver.resolve(&props, &self.host);

        let request = CreateRequest {
            target: self.host.clone(),
            props,
            content,
            class_names: self
                .inputs
                .class_names
                .as_deref()
                .map(split_class_names)
                .unwrap_or_default(),
        };

        let handle = match self.engine.create_instance(request) {
            Ok(handle) => handle,
            Err(error) => {
                log::error!("Failed to create tooltip '{}': {}", name, error);
                self.phase = BindingPhase::Unattached;
                return Err(error.into());
            }
        };

        let targets = self.explicit_trigger_targets();
        if !targets.is_empty() {
            handle.set_trigger_target(&targets);
        }

        self.registry.set_instance(&name, handle.clone());
        log::debug!(
            "Attached tooltip '{}' ({}) to {} with {} content",
            name,
            handle.id(),
            self.host.id(),
            resolver.source().map_or("no", ContentSource::label)
        );

        self.resolver = resolver;
        self.name = Some(name);
        self.handle = Some(handle);
        self.phase = BindingPhase::Attached;
        Ok(())
    }

    /// New `props` input from the host framework
    ///
    /// Before attach the value is simply stored. While attached only the
    /// keys that changed are forwarded; content goes through `set_content`.
    pub fn set_props(&mut self, props: Props) {
        match self.phase {
            BindingPhase::Unattached => {
                self.inputs.props = props;
            }
            BindingPhase::Attached => {
                let fallback = self.engine.default_props();
                let changes = props.changes_from(&self.inputs.props, &fallback);
                // A dropped `content` has no default to report, so compare directly
                let content_changed =
                    changes.touches_content() || props.content != self.inputs.props.content;
                self.inputs.props = props;
                let Some(handle) = &self.handle else {
                    return;
                };

                let partial = changes.without_content();
                if !partial.is_empty() {
                    handle.set_props(&partial);
                }

                if content_changed {
                    let mut merged = fallback;
                    merged.merge(&self.inputs.props);
                    if let Some(content) = self.resolver.update(&merged) {
                        handle.set_content(content);
                    }
                }
            }
            phase => {
                log::debug!("Ignoring props change while {:?}", phase);
            }
        }
    }

    /// New `trigger_targets` input from the host framework
    pub fn set_trigger_targets(&mut self, targets: Option<Vec<ElementRef>>) {
        let previous = std::mem::replace(&mut self.inputs.trigger_targets, targets);
        if self.phase != BindingPhase::Attached || previous == self.inputs.trigger_targets {
            return;
        }
        if let Some(handle) = &self.handle {
            handle.set_trigger_target(&self.explicit_trigger_targets());
        }
    }

    /// Tear down: cancel timers, destroy, unregister
    pub fn detach(&mut self) {
        match self.phase {
            BindingPhase::Attached => {}
            BindingPhase::Unattached => {
                self.phase = BindingPhase::Detached;
                return;
            }
            _ => return,
        }
        self.phase = BindingPhase::Detaching;

        if let Some(handle) = self.handle.take() {
            handle.clear_delay_timeouts();
            handle.destroy();
            if let Some(name) = &self.name {
                self.registry.remove(name, &handle);
            }
            log::debug!("Detached tooltip {} from {}", handle.id(), self.host.id());
        }

        self.phase = BindingPhase::Detached;
    }

    // Explicit targets that differ from the host alone; empty means "use the host"
    fn explicit_trigger_targets(&self) -> Vec<ElementRef> {
        match &self.inputs.trigger_targets {
            Some(targets) if !self.is_host_only(targets) => targets.clone(),
            _ => Vec::new(),
        }
    }

    fn is_host_only(&self, targets: &[ElementRef]) -> bool {
        targets.is_empty() || (targets.len() == 1 && targets[0].id() == self.host.id())
    }
}

impl Drop for TooltipBinding {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
#[path = "binding_tests.rs"]
mod binding_tests;
