//! Errors for parsing turnstile names.

use thiserror::Error;

/// Errors returned when text does not name a known state, event or action.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown turnstile state '{0}'")]
    UnknownState(String),

    #[error("Unknown turnstile event '{0}'")]
    UnknownEvent(String),

    #[error("Unknown turnstile action '{0}'")]
    UnknownAction(String),
}
