//! Tests for engine/scheduler

use std::cell::RefCell;
use std::rc::Rc;

use super::*;

#[test]
fn test_nothing_runs_before_due() {
    let scheduler = Scheduler::new();
    let fired = Rc::new(RefCell::new(Vec::new()));
    let log = fired.clone();
    scheduler.schedule(100, move || log.borrow_mut().push("a"));

    assert_eq!(scheduler.advance(99), 0);
    assert!(fired.borrow().is_empty());
    assert_eq!(scheduler.advance(1), 1);
    assert_eq!(*fired.borrow(), vec!["a"]);
    assert_eq!(scheduler.now(), 100);
}

#[test]
fn test_runs_in_due_order() {
    let scheduler = Scheduler::new();
    let fired = Rc::new(RefCell::new(Vec::new()));
    for (delay, name) in [(300, "late"), (100, "early"), (200, "middle")] {
        let log = fired.clone();
        scheduler.schedule(delay, move || log.borrow_mut().push(name));
    }

    assert_eq!(scheduler.advance(500), 3);
    assert_eq!(*fired.borrow(), vec!["early", "middle", "late"]);
}

#[test]
fn test_same_due_runs_in_schedule_order() {
    let scheduler = Scheduler::new();
    let fired = Rc::new(RefCell::new(Vec::new()));
    for name in ["first", "second"] {
        let log = fired.clone();
        scheduler.schedule(50, move || log.borrow_mut().push(name));
    }

    scheduler.advance(50);
    assert_eq!(*fired.borrow(), vec!["first", "second"]);
}

#[test]
fn test_cancel_prevents_run() {
    let scheduler = Scheduler::new();
    let fired = Rc::new(RefCell::new(0));
    let count = fired.clone();
    let id = scheduler.schedule(10, move || *count.borrow_mut() += 1);

    assert!(scheduler.is_pending(id));
    assert!(scheduler.cancel(id));
    assert!(!scheduler.cancel(id));
    assert!(!scheduler.is_pending(id));

    scheduler.advance(100);
    assert_eq!(*fired.borrow(), 0);
}

#[test]
fn test_task_can_schedule_follow_up_within_window() {
    let scheduler = Rc::new(Scheduler::new());
    let fired = Rc::new(RefCell::new(Vec::new()));

    let inner_scheduler = scheduler.clone();
    let log = fired.clone();
    scheduler.schedule(100, move || {
        log.borrow_mut().push(inner_scheduler.now());
        let log = log.clone();
        let at = inner_scheduler.clone();
        inner_scheduler.schedule(50, move || log.borrow_mut().push(at.now()));
    });

    assert_eq!(scheduler.advance(200), 2);
    assert_eq!(*fired.borrow(), vec![100, 150]);
    assert_eq!(scheduler.now(), 200);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_huge_advance_saturates_clock() {
    let scheduler = Scheduler::new();
    scheduler.advance(10);
    let fired = Rc::new(RefCell::new(Vec::new()));
    let log = fired.clone();
    scheduler.schedule(u64::MAX, move || log.borrow_mut().push("far"));

    assert_eq!(scheduler.advance(u64::MAX), 1);
    assert_eq!(scheduler.now(), u64::MAX);
    assert_eq!(*fired.borrow(), vec!["far"]);

    // Further scheduling and advancing stays pinned at the end of time
    scheduler.schedule(5, || {});
    assert_eq!(scheduler.advance(1), 1);
    assert_eq!(scheduler.now(), u64::MAX);
}
