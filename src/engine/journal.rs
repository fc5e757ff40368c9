use std::cell::RefCell;

use crate::instance::InstanceId;

/// Effective operations observed by the headless engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceEvent {
    Created,
    /// Show started (after any delay)
    Show,
    /// Show transition finished
    Shown,
    Hide,
    Hidden,
    HideDeferred,
    Enable,
    Disable,
    SetProps(Vec<String>),
    SetContent,
    SetTriggerTarget(usize),
    Unmount,
    ClearDelayTimeouts,
    Destroy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub instance: InstanceId,
    /// Scheduler time when recorded
    pub at: u64,
    pub event: InstanceEvent,
}

#[derive(Debug, Default)]
pub struct Journal {
    entries: RefCell<Vec<JournalEntry>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, instance: InstanceId, at: u64, event: InstanceEvent) {
        self.entries.borrow_mut().push(JournalEntry {
            instance,
            at,
            event,
        });
    }

    pub fn entries(&self) -> Vec<JournalEntry> {
        self.entries.borrow().clone()
    }

    /// Events for one instance in recording order
    pub fn events_for(&self, instance: InstanceId) -> Vec<InstanceEvent> {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.instance == instance)
            .map(|entry| entry.event.clone())
            .collect()
    }

    pub fn count(&self, event: &InstanceEvent) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| &entry.event == event)
            .count()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}
