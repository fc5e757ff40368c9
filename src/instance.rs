//! Instance handle contract
//!
//! The presentation engine owns rendering, positioning and animation. This
//! module defines the seam: a factory (`TooltipEngine`) creating handles
//! (`TooltipInstance`) that the rest of the crate drives.
//!
//! All handle operations take `&self`; handles are shared (`Rc`) between the
//! owning binding and the registry and rely on interior mutability. Once a
//! handle is destroyed every operation other than `destroy` returns `false`
//! without effect.

mod state;

use std::fmt;
use std::rc::Rc;

use crate::content::Content;
use crate::element::ElementRef;
use crate::error::CreationError;
use crate::props::Props;

pub use state::{InstanceState, Lifecycle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Pointer position relative to the tooltip, for `hide_with_interactivity`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerEvent {
    /// Pointer is currently over the tooltip's interactive content
    pub over_content: bool,
}

pub trait TooltipInstance {
    fn id(&self) -> InstanceId;

    /// Element the tooltip is anchored to, if it still exists
    fn reference(&self) -> Option<ElementRef>;

    fn state(&self) -> InstanceState;

    /// Snapshot of the current merged props
    fn props(&self) -> Props;

    /// Request a show; may complete later (delay, animation)
    fn show(&self) -> bool;

    /// Request a hide; may complete later
    fn hide(&self) -> bool;

    /// Hide, deferring while the pointer is over interactive content
    fn hide_with_interactivity(&self, pointer: &PointerEvent) -> bool;

    fn enable(&self) -> bool;

    /// Stop honouring show/hide requests; current visibility is kept
    fn disable(&self) -> bool;

    /// Shallow-merge `partial` into the current props
    fn set_props(&self, partial: &Props) -> bool;

    fn set_content(&self, content: Content) -> bool;

    /// Elements that generate trigger events; empty means the reference itself
    fn set_trigger_target(&self, targets: &[ElementRef]) -> bool;

    /// Remove rendered output but keep the instance usable
    fn unmount(&self) -> bool;

    /// Cancel pending delayed show/hide timers
    fn clear_delay_timeouts(&self) -> bool;

    /// Terminal; idempotent
    fn destroy(&self);
}

pub type InstanceHandle = Rc<dyn TooltipInstance>;

/// Identity comparison for handles
pub fn same_instance(a: &InstanceHandle, b: &InstanceHandle) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

/// Everything the engine needs to build one instance
#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub target: ElementRef,
    /// Fully merged props (library < global < binding)
    pub props: Props,
    pub content: Content,
    /// Extra classes for the rendered box
    pub class_names: Vec<String>,
}

/// Factory boundary to the presentation engine
pub trait TooltipEngine {
    fn create_instance(&self, request: CreateRequest) -> Result<InstanceHandle, CreationError>;

    /// Merge `partial` into the global defaults used by future instances
    fn set_default_props(&self, partial: &Props);

    /// Library defaults overlaid with the global defaults
    fn default_props(&self) -> Props;
}

/// Split a space-separated class list
pub fn split_class_names(class_names: &str) -> Vec<String> {
    class_names.split_whitespace().map(str::to_string).collect()
}
