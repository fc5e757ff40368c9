//! Host element model
//!
//! A minimal stand-in for the node a binding is attached to. The host UI
//! framework owns the real element; this crate only needs identity, the
//! attributes read at creation, and whether the node is still in the tree.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

/// Attribute holding plain tooltip content on the host element
pub const CONTENT_ATTRIBUTE: &str = "data-tippy-content";

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element#{}", self.0)
    }
}

/// Shared reference to a host element
pub type ElementRef = Rc<HostElement>;

/// Non-owning reference held by tooltip instances
pub type WeakElement = Weak<HostElement>;

pub struct HostElement {
    id: ElementId,
    tag: String,
    attributes: RefCell<BTreeMap<String, String>>,
    connected: Cell<bool>,
}

impl HostElement {
    /// Create a connected element
    pub fn new(tag: impl Into<String>) -> ElementRef {
        Rc::new(Self {
            id: ElementId(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed)),
            tag: tag.into(),
            attributes: RefCell::new(BTreeMap::new()),
            connected: Cell::new(true),
        })
    }

    /// Create an element that is not part of any tree (e.g. a template container)
    pub fn detached(tag: impl Into<String>) -> ElementRef {
        let element = Self::new(tag);
        element.connected.set(false);
        element
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.borrow_mut().insert(name.into(), value.into());
    }

    pub fn remove_attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow_mut().remove(name)
    }

    pub fn is_connected(&self) -> bool {
        self.connected.get()
    }

    /// Insert the element back into the tree
    pub fn connect(&self) {
        self.connected.set(true);
    }

    /// Remove the element from the tree; the node itself stays alive while referenced
    pub fn disconnect(&self) {
        self.connected.set(false);
    }
}

impl fmt::Debug for HostElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostElement")
            .field("id", &self.id)
            .field("tag", &self.tag)
            .field("connected", &self.connected.get())
            .finish()
    }
}

impl PartialEq for HostElement {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for HostElement {}

/// Builder-style helper for the common "element with a content attribute" case
pub fn element_with_content(tag: &str, content: &str) -> ElementRef {
    let element = HostElement::new(tag);
    element.set_attribute(CONTENT_ATTRIBUTE, content);
    element
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod element_tests;
