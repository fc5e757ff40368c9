use thiserror::Error;

use crate::binding::BindingPhase;
use crate::element::ElementId;

/// Why an engine refused to create an instance
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CreationError {
    #[error("Cannot attach tooltip: {0} is not connected to the tree")]
    TargetDetached(ElementId),

    #[error("Cannot attach tooltip: target element no longer exists")]
    TargetDropped,

    #[error("Engine rejected tooltip: {0}")]
    Engine(String),
}

/// Errors surfaced by a binding to the host framework
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindError {
    #[error(transparent)]
    Creation(#[from] CreationError),

    #[error("Binding cannot attach while {0:?}")]
    InvalidPhase(BindingPhase),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
