//! Headless presentation engine
//!
//! A complete in-memory implementation of the factory boundary. It keeps
//! tooltip state, delay and transition timers on a manual clock, trigger
//! handling, and a render snapshot, but draws nothing. Every effective
//! operation is written to a journal so callers can observe ordering.

mod instance;
mod journal;
mod render;
mod scheduler;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::element::HostElement;
use crate::error::CreationError;
use crate::instance::{CreateRequest, InstanceHandle, InstanceId, TooltipEngine, TooltipInstance};
use crate::props::{DefaultProps, Props};

pub use instance::HeadlessInstance;
pub use journal::{InstanceEvent, Journal, JournalEntry};
pub use render::{BOX_CLASS, RenderedBox};
pub use scheduler::{Scheduler, TimerId};

use instance::InstanceParts;

/// Host events the engine's trigger machinery understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    MouseEnter,
    /// `into_content` is true when the pointer moved onto the tooltip itself
    MouseLeave { into_content: bool },
    Focus,
    Blur,
    Click,
}

impl TriggerEvent {
    pub fn parse(name: &str) -> Option<TriggerEvent> {
        match name {
            "mouseenter" => Some(TriggerEvent::MouseEnter),
            "mouseleave" => Some(TriggerEvent::MouseLeave {
                into_content: false,
            }),
            "mouseleave-into-content" => Some(TriggerEvent::MouseLeave { into_content: true }),
            "focus" | "focusin" => Some(TriggerEvent::Focus),
            "blur" | "focusout" => Some(TriggerEvent::Blur),
            "click" => Some(TriggerEvent::Click),
            _ => None,
        }
    }
}

pub struct HeadlessEngine {
    scheduler: Rc<Scheduler>,
    journal: Rc<Journal>,
    defaults: RefCell<DefaultProps>,
    instances: RefCell<Vec<Weak<HeadlessInstance>>>,
    next_id: Cell<u64>,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self::with_defaults(DefaultProps::new())
    }

    pub fn with_defaults(defaults: DefaultProps) -> Self {
        Self {
            scheduler: Rc::new(Scheduler::new()),
            journal: Rc::new(Journal::new()),
            defaults: RefCell::new(defaults),
            instances: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Advance the clock, firing due delay and transition timers
    pub fn advance(&self, ms: u64) -> usize {
        self.scheduler.advance(ms)
    }

    /// Number of instances ever created by this engine
    pub fn created_count(&self) -> u64 {
        self.next_id.get() - 1
    }

    pub fn instance(&self, id: InstanceId) -> Option<Rc<HeadlessInstance>> {
        self.alive()
            .into_iter()
            .find(|instance| instance.id() == id)
    }

    /// Instances that exist and are not destroyed
    pub fn live_instances(&self) -> Vec<Rc<HeadlessInstance>> {
        self.alive()
            .into_iter()
            .filter(|instance| !instance.state().is_destroyed)
            .collect()
    }

    /// Deliver a host event; returns how many instances reacted
    pub fn dispatch(&self, element: &HostElement, event: TriggerEvent) -> usize {
        self.live_instances()
            .iter()
            .filter(|instance| instance.handle_trigger(element.id(), event))
            .count()
    }

    fn alive(&self) -> Vec<Rc<HeadlessInstance>> {
        let mut instances = self.instances.borrow_mut();
        instances.retain(|weak| weak.strong_count() > 0);
        instances.iter().filter_map(Weak::upgrade).collect()
    }
}

impl Default for HeadlessEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TooltipEngine for HeadlessEngine {
    fn create_instance(&self, request: CreateRequest) -> Result<InstanceHandle, CreationError> {
        if !request.target.is_connected() {
            return Err(CreationError::TargetDetached(request.target.id()));
        }

        let id = InstanceId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let show_on_create = request.props.show_on_create.unwrap_or(false);
        let instance = HeadlessInstance::new(InstanceParts {
            id,
            reference: Rc::downgrade(&request.target),
            props: request.props,
            content: request.content,
            class_names: request.class_names,
            scheduler: self.scheduler.clone(),
            journal: self.journal.clone(),
        });
        self.instances.borrow_mut().push(Rc::downgrade(&instance));
        self.journal
            .record(id, self.scheduler.now(), InstanceEvent::Created);
        log::debug!("Created tooltip {} on {}", id, request.target.id());

        if show_on_create {
            instance.show();
        }
        Ok(instance)
    }

    fn set_default_props(&self, partial: &Props) {
        self.defaults.borrow_mut().set_global(partial);
    }

    fn default_props(&self) -> Props {
        self.defaults.borrow().merged()
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
