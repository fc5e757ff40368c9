//! Manual clock driving delay and transition timers
//!
//! Nothing runs until `advance` is called, which makes timer-dependent
//! behaviour deterministic in tests and scenario replays.

use std::cell::{Cell, RefCell};
use std::fmt;

type Task = Box<dyn FnOnce()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

struct Timer {
    id: TimerId,
    due: u64,
    task: Task,
}

#[derive(Default)]
pub struct Scheduler {
    now: Cell<u64>,
    next_id: Cell<u64>,
    timers: RefCell<Vec<Timer>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time in milliseconds since the scheduler was created
    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn schedule(&self, after_ms: u64, task: impl FnOnce() + 'static) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.timers.borrow_mut().push(Timer {
            id,
            due: self.now.get().saturating_add(after_ms),
            task: Box::new(task),
        });
        id
    }

    /// Drop a pending timer; false if it already ran or was cancelled
    pub fn cancel(&self, id: TimerId) -> bool {
        let mut timers = self.timers.borrow_mut();
        let before = timers.len();
        timers.retain(|timer| timer.id != id);
        timers.len() != before
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.borrow().iter().any(|timer| timer.id == id)
    }

    pub fn pending(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Move the clock forward, running due timers in order. Returns how many ran.
    pub fn advance(&self, ms: u64) -> usize {
        let until = self.now.get().saturating_add(ms);
        let mut ran = 0;

        // Pop one timer at a time so a task can schedule or cancel others
        while let Some(timer) = self.pop_due(until) {
            self.now.set(timer.due);
            (timer.task)();
            ran += 1;
        }

        self.now.set(until);
        ran
    }

    fn pop_due(&self, until: u64) -> Option<Timer> {
        let mut timers = self.timers.borrow_mut();
        let index = timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= until)
            .min_by_key(|(_, timer)| (timer.due, timer.id.0))
            .map(|(index, _)| index)?;
        Some(timers.remove(index))
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("now", &self.now.get())
            .field("pending", &self.pending())
            .finish()
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod scheduler_tests;
