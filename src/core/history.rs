//! Transition history tracking.
//!
//! Every input a machine handles leaves one record behind, whether it
//! matched a rule, fell through to `unexpected_transition`, or was a reset.
//! Machines cap their history so a long-running turnstile stays bounded.

use super::action::Action;
use super::state::{Event, TurnstileState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

/// What the machine was asked to do.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Input {
    /// A table event.
    Event(Event),
    /// The unconditional reset command.
    Reset,
}

impl From<Event> for Input {
    fn from(event: Event) -> Self {
        Input::Event(event)
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Event(event) => f.write_str(event.name()),
            Input::Reset => f.write_str("Reset"),
        }
    }
}

/// How an input was resolved.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Outcome {
    /// A rule (or the reset command) produced the actions.
    Handled,
    /// No rule existed; `unexpected_transition` was reported instead.
    Unexpected,
}

/// Record of one handled input.
///
/// # Example
///
/// ```rust
/// use turnstile::{Action, Event, Outcome, TransitionRecord, TurnstileState};
///
/// let record = TransitionRecord::new(
///     TurnstileState::FirstCoin,
///     TurnstileState::Unlocked,
///     Event::Coin,
///     vec![Action::Unlock],
///     Outcome::Handled,
/// );
/// assert!(record.changed_state());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// State before the input
    pub from: TurnstileState,
    /// State after the input
    pub to: TurnstileState,
    /// The input that was handled
    pub input: Input,
    /// Actions invoked on the handler, in order
    pub actions: Vec<Action>,
    /// Whether a rule matched
    pub outcome: Outcome,
    /// When the input was handled
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    /// Create a record stamped with the current time.
    pub fn new(
        from: TurnstileState,
        to: TurnstileState,
        input: impl Into<Input>,
        actions: Vec<Action>,
        outcome: Outcome,
    ) -> Self {
        Self {
            from,
            to,
            input: input.into(),
            actions,
            outcome,
            timestamp: Utc::now(),
        }
    }

    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of handled inputs, optionally capped.
///
/// A capped history keeps the most recent `limit` records and drops the
/// oldest one for each record past the cap. A cap of zero keeps nothing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionHistory {
    records: VecDeque<TransitionRecord>,
    #[serde(default)]
    limit: Option<usize>,
}

impl TransitionHistory {
    /// Cap used by machines that are not given one explicitly.
    pub const DEFAULT_LIMIT: usize = 64;

    /// An uncapped history.
    pub fn new() -> Self {
        Self::default()
    }

    /// A history that keeps at most `limit` records.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(limit.min(Self::DEFAULT_LIMIT)),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Append a record, evicting the oldest ones once the cap is reached.
    pub fn record(&mut self, record: TransitionRecord) {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return;
            }
            while self.records.len() >= limit {
                self.records.pop_front();
            }
        }
        self.records.push_back(record);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained record followed by
    /// the `to` state of every record. Empty when nothing is retained.
    pub fn get_path(&self) -> Vec<TurnstileState> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|record| record.to));
        path
    }

    /// Time between the oldest and newest record, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Number of retained inputs that had no rule.
    pub fn unexpected_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.outcome == Outcome::Unexpected)
            .count()
    }

    /// Retained records, oldest first.
    pub fn records(
        &self,
    ) -> impl DoubleEndedIterator<Item = &TransitionRecord> + ExactSizeIterator {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record; the cap is kept.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
