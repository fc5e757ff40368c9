use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::element::{ElementRef, HostElement};

type ActionHandler = Rc<dyn Fn()>;

struct TemplateInner {
    class_name: String,
    markup: String,
    actions: RefCell<BTreeMap<String, ActionHandler>>,
    renders: Cell<usize>,
}

/// Reference to projected child content with its own live handlers
///
/// Cloning shares the same template; equality is identity.
#[derive(Clone)]
pub struct Template {
    inner: Rc<TemplateInner>,
}

impl Template {
    pub fn new(class_name: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(TemplateInner {
                class_name: class_name.into(),
                markup: markup.into(),
                actions: RefCell::new(BTreeMap::new()),
                renders: Cell::new(0),
            }),
        }
    }

    /// Register a handler for an interactive child (e.g. a button's click)
    pub fn on_action(self, action: impl Into<String>, handler: impl Fn() + 'static) -> Self {
        self.inner
            .actions
            .borrow_mut()
            .insert(action.into(), Rc::new(handler));
        self
    }

    pub fn class_name(&self) -> &str {
        &self.inner.class_name
    }

    /// Render into a fresh detached container
    pub fn render(&self) -> Fragment {
        self.inner.renders.set(self.inner.renders.get() + 1);

        let container = HostElement::detached("div");
        container.set_attribute("class", self.inner.class_name.clone());

        Fragment {
            inner: Rc::new(FragmentInner {
                container,
                markup: self.inner.markup.clone(),
                actions: self.inner.actions.borrow().clone(),
            }),
        }
    }

    /// How many times this template has been rendered
    pub fn render_count(&self) -> usize {
        self.inner.renders.get()
    }
}

impl PartialEq for Template {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("class_name", &self.inner.class_name)
            .field("renders", &self.inner.renders.get())
            .finish()
    }
}

struct FragmentInner {
    container: ElementRef,
    markup: String,
    actions: BTreeMap<String, ActionHandler>,
}

/// A rendered template, handed to the engine as tooltip content
#[derive(Clone)]
pub struct Fragment {
    inner: Rc<FragmentInner>,
}

impl Fragment {
    /// Detached container the template was rendered into
    pub fn container(&self) -> &ElementRef {
        &self.inner.container
    }

    pub fn class_name(&self) -> String {
        self.inner.container.attribute("class").unwrap_or_default()
    }

    pub fn markup(&self) -> &str {
        &self.inner.markup
    }

    pub fn actions(&self) -> Vec<&str> {
        self.inner.actions.keys().map(String::as_str).collect()
    }

    /// Fire an interactive child's handler; false if the fragment has no such action
    pub fn trigger(&self, action: &str) -> bool {
        match self.inner.actions.get(action) {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl PartialEq for Fragment {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fragment")
            .field("container", &self.inner.container.id())
            .field("markup", &self.inner.markup)
            .field("actions", &self.actions())
            .finish()
    }
}
