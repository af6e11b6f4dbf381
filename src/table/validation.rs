//! Table validation.
//!
//! Checks accumulate with Stillwater's `Validation` so a broken table is
//! reported in full rather than one problem at a time.

use super::TransitionTable;
use crate::core::{Event, TurnstileState};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Problems that make a table unusable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Transition table has no rules")]
    Empty,

    #[error("Duplicate rule for {state}({event})")]
    DuplicateRule {
        state: TurnstileState,
        event: Event,
    },

    #[error("State {state} is never entered")]
    UnusedState { state: TurnstileState },
}

impl TransitionTable {
    /// Check the table for a machine starting in `initial`.
    ///
    /// A state counts as used when it is `initial`, the reset target, or
    /// the next state of some rule. Returns every failure found.
    pub fn validate(&self, initial: TurnstileState) -> Validation<(), NonEmptyVec<TableError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<TableError>>> = Vec::new();

        if self.is_empty() {
            checks.push(Validation::fail(TableError::Empty));
        }

        let mut seen = HashSet::new();
        for rule in self.rules() {
            if !seen.insert((rule.state, rule.event)) {
                checks.push(Validation::fail(TableError::DuplicateRule {
                    state: rule.state,
                    event: rule.event,
                }));
            }
        }

        for state in TurnstileState::ALL.iter().copied() {
            let used = state == initial
                || state == TurnstileState::RESET
                || self.rules().iter().any(|rule| rule.next == state);
            if !used {
                checks.push(Validation::fail(TableError::UnusedState { state }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
