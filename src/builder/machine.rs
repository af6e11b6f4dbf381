//! Builder for constructing turnstiles.

use crate::builder::error::BuildError;
use crate::core::{TransitionHistory, TurnstileActions, TurnstileState};
use crate::machine::TwoCoinTurnstile;
use crate::table::TransitionTable;
use stillwater::validation::Validation;
use tracing::debug;

/// Builder for constructing turnstiles with a fluent API.
///
/// # Example
///
/// ```rust
/// use turnstile::{ActionRecorder, TurnstileBuilder, TurnstileState};
///
/// let turnstile = TurnstileBuilder::new()
///     .actions(ActionRecorder::new())
///     .initial(TurnstileState::Unlocked)
///     .build()
///     .unwrap();
///
/// assert_eq!(turnstile.state(), TurnstileState::Unlocked);
/// ```
pub struct TurnstileBuilder<A: TurnstileActions> {
    actions: Option<A>,
    table: Option<TransitionTable>,
    initial: Option<TurnstileState>,
    history_limit: Option<usize>,
}

impl<A: TurnstileActions> TurnstileBuilder<A> {
    pub fn new() -> Self {
        Self {
            actions: None,
            table: None,
            initial: None,
            history_limit: None,
        }
    }

    /// Set the action handler (required).
    pub fn actions(mut self, actions: A) -> Self {
        self.actions = Some(actions);
        self
    }

    /// Replace the two-coin table.
    pub fn table(mut self, table: TransitionTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Start somewhere other than `Locked`.
    pub fn initial(mut self, state: TurnstileState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Keep at most `limit` history records; zero disables history.
    ///
    /// Defaults to [`TransitionHistory::DEFAULT_LIMIT`].
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Build the turnstile.
    ///
    /// Fails if no handler was given or if the table does not validate.
    /// All table problems are reported together.
    pub fn build(self) -> Result<TwoCoinTurnstile<A>, BuildError> {
        let actions = self.actions.ok_or(BuildError::MissingActions)?;
        let table = self.table.unwrap_or_default();
        let initial = self.initial.unwrap_or_default();
        let history_limit = self
            .history_limit
            .unwrap_or(TransitionHistory::DEFAULT_LIMIT);

        if let Validation::Failure(errors) = table.validate(initial) {
            return Err(BuildError::InvalidTable(errors));
        }

        debug!(%initial, rules = table.len(), history_limit, "built turnstile");
        Ok(TwoCoinTurnstile::from_parts(
            actions,
            table,
            initial,
            TransitionHistory::with_limit(history_limit),
        ))
    }
}

impl<A: TurnstileActions> Default for TurnstileBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}
