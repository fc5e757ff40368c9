use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::journal::{InstanceEvent, Journal};
use super::render::RenderedBox;
use super::scheduler::{Scheduler, TimerId};
use super::TriggerEvent;
use crate::content::Content;
use crate::element::{ElementId, ElementRef, WeakElement};
use crate::instance::{InstanceId, InstanceState, PointerEvent, TooltipInstance};
use crate::props::{Props, Timing, Trigger};

/// In-memory tooltip instance driven by the engine's scheduler
pub struct HeadlessInstance {
    id: InstanceId,
    me: Weak<HeadlessInstance>,
    reference: WeakElement,
    state: Cell<InstanceState>,
    props: RefCell<Props>,
    content: RefCell<Content>,
    class_names: Vec<String>,
    trigger_targets: RefCell<Vec<WeakElement>>,
    delay_timers: RefCell<Vec<TimerId>>,
    transition_timer: Cell<Option<TimerId>>,
    deferred_hide: Cell<bool>,
    scheduler: Rc<Scheduler>,
    journal: Rc<Journal>,
}

pub(super) struct InstanceParts {
    pub id: InstanceId,
    pub reference: WeakElement,
    pub props: Props,
    pub content: Content,
    pub class_names: Vec<String>,
    pub scheduler: Rc<Scheduler>,
    pub journal: Rc<Journal>,
}

impl HeadlessInstance {
    pub(super) fn new(parts: InstanceParts) -> Rc<Self> {
        Rc::new_cyclic(|me| Self {
            id: parts.id,
            me: me.clone(),
            reference: parts.reference,
            state: Cell::new(InstanceState::new()),
            props: RefCell::new(parts.props),
            content: RefCell::new(parts.content),
            class_names: parts.class_names,
            trigger_targets: RefCell::new(Vec::new()),
            delay_timers: RefCell::new(Vec::new()),
            transition_timer: Cell::new(None),
            deferred_hide: Cell::new(false),
            scheduler: parts.scheduler,
            journal: parts.journal,
        })
    }

    pub fn content(&self) -> Content {
        self.content.borrow().clone()
    }

    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    /// Live elements currently generating trigger events
    pub fn trigger_targets(&self) -> Vec<ElementRef> {
        self.trigger_targets
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .collect()
    }

    /// Delay timers scheduled and not yet fired or cancelled
    pub fn pending_delays(&self) -> usize {
        self.delay_timers
            .borrow()
            .iter()
            .filter(|id| self.scheduler.is_pending(**id))
            .count()
    }

    pub fn is_hide_deferred(&self) -> bool {
        self.deferred_hide.get()
    }

    /// Rendered output while mounted
    pub fn rendered(&self) -> Option<RenderedBox> {
        let state = self.state.get();
        if !state.is_mounted || state.is_destroyed {
            return None;
        }
        Some(RenderedBox::build(
            &self.props.borrow(),
            &self.content.borrow(),
            &self.class_names,
            state.is_visible,
        ))
    }

    /// The pointer left interactive content; completes a deferred hide
    pub fn pointer_left_content(&self) -> bool {
        if !self.deferred_hide.replace(false) {
            return false;
        }
        self.hide()
    }

    /// React to an event on `element` according to the `trigger` prop
    pub(super) fn handle_trigger(&self, element: ElementId, event: TriggerEvent) -> bool {
        if self.is_stale("trigger") || !self.listens_on(element) {
            return false;
        }

        let (triggers, interactive, hide_on_click) = {
            let props = self.props.borrow();
            (
                props.triggers(),
                props.interactive.unwrap_or(false),
                props.hide_on_click.unwrap_or(true),
            )
        };
        let has = |trigger: Trigger| triggers.contains(&trigger);
        let focus = has(Trigger::Focus) || has(Trigger::FocusIn);

        match event {
            TriggerEvent::MouseEnter if has(Trigger::MouseEnter) => self.show(),
            TriggerEvent::MouseLeave { into_content } if has(Trigger::MouseEnter) => {
                if interactive {
                    self.hide_with_interactivity(&PointerEvent {
                        over_content: into_content,
                    })
                } else {
                    self.hide()
                }
            }
            TriggerEvent::Focus if focus => self.show(),
            TriggerEvent::Blur if focus => self.hide(),
            TriggerEvent::Click if has(Trigger::Click) => {
                if !self.state.get().is_visible {
                    self.show()
                } else if hide_on_click {
                    self.hide()
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    fn listens_on(&self, element: ElementId) -> bool {
        let targets = self.trigger_targets.borrow();
        if targets.is_empty() {
            return self
                .reference
                .upgrade()
                .is_some_and(|reference| reference.id() == element);
        }
        targets
            .iter()
            .filter_map(Weak::upgrade)
            .any(|target| target.id() == element)
    }

    fn record(&self, event: InstanceEvent) {
        self.journal.record(self.id, self.scheduler.now(), event);
    }

    fn update_state(&self, update: impl FnOnce(&mut InstanceState)) {
        let mut state = self.state.get();
        update(&mut state);
        self.state.set(state);
    }

    fn is_stale(&self, operation: &str) -> bool {
        let destroyed = self.state.get().is_destroyed;
        if destroyed {
            log::debug!("Ignoring {} on destroyed tooltip {}", operation, self.id);
        }
        destroyed
    }

    fn cancel_delays(&self) {
        for id in self.delay_timers.borrow_mut().drain(..) {
            self.scheduler.cancel(id);
        }
    }

    fn cancel_transition(&self) {
        if let Some(id) = self.transition_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    fn schedule_delay(&self, after_ms: u64, action: fn(&HeadlessInstance) -> bool) {
        let me = self.me.clone();
        let id = self.scheduler.schedule(after_ms, move || {
            if let Some(instance) = me.upgrade() {
                action(&instance);
            }
        });
        self.delay_timers.borrow_mut().push(id);
    }

    fn schedule_transition(&self, after_ms: u64, action: fn(&HeadlessInstance)) {
        let me = self.me.clone();
        let id = self.scheduler.schedule(after_ms, move || {
            if let Some(instance) = me.upgrade() {
                instance.transition_timer.set(None);
                action(&instance);
            }
        });
        self.transition_timer.set(Some(id));
    }

    fn timing(&self, pick: fn(&Props) -> Option<Timing>, showing: bool) -> u64 {
        pick(&self.props.borrow())
            .map(|timing| {
                if showing {
                    timing.show_ms()
                } else {
                    timing.hide_ms()
                }
            })
            .unwrap_or(0)
    }

    fn begin_show(&self) -> bool {
        let state = self.state.get();
        if state.is_destroyed || !state.is_enabled {
            return false;
        }
        let attached = self
            .reference
            .upgrade()
            .is_some_and(|reference| reference.is_connected());
        if !attached {
            log::debug!("Not showing tooltip {}: reference is detached", self.id);
            return false;
        }
        if state.is_visible {
            return true;
        }

        self.cancel_transition();
        self.update_state(|state| {
            state.is_visible = true;
            state.is_mounted = true;
            state.is_shown = false;
            state.has_shown = true;
        });
        self.record(InstanceEvent::Show);

        let duration = self.timing(|props| props.duration, true);
        if duration == 0 {
            self.finish_show();
        } else {
            self.schedule_transition(duration, HeadlessInstance::finish_show);
        }
        true
    }

    fn finish_show(&self) {
        let state = self.state.get();
        if state.is_destroyed || !state.is_visible {
            return;
        }
        self.update_state(|state| state.is_shown = true);
        self.record(InstanceEvent::Shown);
    }

    fn begin_hide(&self) -> bool {
        let state = self.state.get();
        if state.is_destroyed || !state.is_enabled {
            return false;
        }
        if !state.is_visible {
            return true;
        }

        self.cancel_transition();
        self.update_state(|state| {
            state.is_visible = false;
            state.is_shown = false;
        });
        self.record(InstanceEvent::Hide);

        let duration = self.timing(|props| props.duration, false);
        if duration == 0 {
            self.finish_hide();
        } else {
            self.schedule_transition(duration, HeadlessInstance::finish_hide);
        }
        true
    }

    fn finish_hide(&self) {
        let state = self.state.get();
        if state.is_destroyed || state.is_visible {
            return;
        }
        self.update_state(|state| state.is_mounted = false);
        self.record(InstanceEvent::Hidden);
    }
}

impl TooltipInstance for HeadlessInstance {
    fn id(&self) -> InstanceId {
        self.id
    }

    fn reference(&self) -> Option<ElementRef> {
        self.reference.upgrade()
    }

    fn state(&self) -> InstanceState {
        self.state.get()
    }

    fn props(&self) -> Props {
        self.props.borrow().clone()
    }

    fn show(&self) -> bool {
        if self.is_stale("show") || !self.state.get().is_enabled {
            return false;
        }
        self.deferred_hide.set(false);
        self.cancel_delays();

        let delay = self.timing(|props| props.delay, true);
        if delay == 0 {
            return self.begin_show();
        }
        self.schedule_delay(delay, HeadlessInstance::begin_show);
        true
    }

    fn hide(&self) -> bool {
        if self.is_stale("hide") || !self.state.get().is_enabled {
            return false;
        }
        self.deferred_hide.set(false);
        self.cancel_delays();

        let delay = self.timing(|props| props.delay, false);
        if delay == 0 {
            return self.begin_hide();
        }
        self.schedule_delay(delay, HeadlessInstance::begin_hide);
        true
    }

    fn hide_with_interactivity(&self, pointer: &PointerEvent) -> bool {
        if self.is_stale("hideWithInteractivity") || !self.state.get().is_enabled {
            return false;
        }
        let interactive = self.props.borrow().interactive.unwrap_or(false);
        if interactive && pointer.over_content && self.state.get().is_visible {
            self.deferred_hide.set(true);
            self.record(InstanceEvent::HideDeferred);
            return true;
        }
        self.hide()
    }

    fn enable(&self) -> bool {
        if self.is_stale("enable") {
            return false;
        }
        self.update_state(|state| state.is_enabled = true);
        self.record(InstanceEvent::Enable);
        true
    }

    fn disable(&self) -> bool {
        if self.is_stale("disable") {
            return false;
        }
        self.update_state(|state| state.is_enabled = false);
        self.record(InstanceEvent::Disable);
        true
    }

    fn set_props(&self, partial: &Props) -> bool {
        if self.is_stale("setProps") {
            return false;
        }

        let reinterpret = {
            let mut props = self.props.borrow_mut();
            props.merge(partial);
            let allow_html = props.allow_html.unwrap_or(false);
            match (&partial.content, partial.allow_html) {
                (Some(value), _) => Some(Content::from_prop(value, allow_html)),
                (None, Some(_)) => match &*self.content.borrow() {
                    Content::Text(value) | Content::Html(value) => {
                        Some(Content::from_prop(value, allow_html))
                    }
                    Content::Fragment(_) => None,
                },
                (None, None) => None,
            }
        };
        if let Some(content) = reinterpret {
            *self.content.borrow_mut() = content;
        }

        let keys = partial.keys().into_iter().map(str::to_string).collect();
        self.record(InstanceEvent::SetProps(keys));
        true
    }

    fn set_content(&self, content: Content) -> bool {
        if self.is_stale("setContent") {
            return false;
        }
        *self.content.borrow_mut() = content;
        self.record(InstanceEvent::SetContent);
        true
    }

    fn set_trigger_target(&self, targets: &[ElementRef]) -> bool {
        if self.is_stale("setTriggerTarget") {
            return false;
        }
        *self.trigger_targets.borrow_mut() = targets.iter().map(Rc::downgrade).collect();
        self.record(InstanceEvent::SetTriggerTarget(targets.len()));
        true
    }

    fn unmount(&self) -> bool {
        if self.is_stale("unmount") {
            return false;
        }
        self.cancel_transition();
        self.deferred_hide.set(false);
        self.update_state(|state| {
            state.is_visible = false;
            state.is_shown = false;
            state.is_mounted = false;
        });
        self.record(InstanceEvent::Unmount);
        true
    }

    fn clear_delay_timeouts(&self) -> bool {
        if self.is_stale("clearDelayTimeouts") {
            return false;
        }
        self.cancel_delays();
        self.record(InstanceEvent::ClearDelayTimeouts);
        true
    }

    fn destroy(&self) {
        if self.state.get().is_destroyed {
            return;
        }
        self.cancel_delays();
        self.cancel_transition();
        self.deferred_hide.set(false);
        self.trigger_targets.borrow_mut().clear();
        self.update_state(|state| {
            state.is_destroyed = true;
            state.is_visible = false;
            state.is_shown = false;
            state.is_mounted = false;
        });
        self.record(InstanceEvent::Destroy);
    }
}

impl Drop for HeadlessInstance {
    fn drop(&mut self) {
        // Queued tasks hold a weak self that can no longer upgrade
        self.cancel_delays();
        self.cancel_transition();
    }
}
