//! Declarative tooltip bindings over an imperative tooltip engine
//!
//! A [`TooltipBinding`] keeps one host element's inputs in sync with one
//! tooltip instance created through a [`TooltipEngine`]. Every live instance
//! is registered by name in a [`Registry`] so [`TooltipControl`] can reach it
//! from anywhere in the session.

pub mod binding;
pub mod config;
pub mod content;
pub mod control;
pub mod element;
pub mod engine;
pub mod error;
pub mod instance;
pub mod props;
pub mod registry;
pub mod scenario;

mod test_utils;

pub use binding::{BindingInputs, BindingPhase, TooltipBinding};
pub use content::{Content, ContentSource, Template};
pub use control::{TooltipContext, TooltipControl};
pub use element::{ElementRef, HostElement};
pub use engine::HeadlessEngine;
pub use error::{BindError, CreationError};
pub use instance::{InstanceHandle, Lifecycle, TooltipEngine, TooltipInstance};
pub use props::{DefaultProps, Props};
pub use registry::{BulkOptions, Instances, Registry};
