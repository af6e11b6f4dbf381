//! Build errors for the turnstile builder.

use crate::table::TableError;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Errors that can occur when building a turnstile.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Action handler not specified. Call .actions(handler) before .build()")]
    MissingActions,

    #[error("Transition table is invalid: {}", describe(.0))]
    InvalidTable(NonEmptyVec<TableError>),
}

fn describe(errors: &NonEmptyVec<TableError>) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
