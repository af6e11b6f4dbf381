//! The two-coin turnstile state machine.

use crate::builder::TurnstileBuilder;
use crate::core::{
    Action, Event, Input, Outcome, TransitionHistory, TransitionRecord, TurnstileActions,
    TurnstileState,
};
use crate::table::TransitionTable;
use tracing::{debug, warn};

/// Table-driven turnstile that reports its effects through `A`.
///
/// Dispatch is synchronous: every call returns only after all handler
/// invocations for that input have run. Actions are invoked before the
/// state is updated.
///
/// # Example
///
/// ```rust
/// use turnstile::{ActionRecorder, TurnstileState, TwoCoinTurnstile};
///
/// let mut turnstile = TwoCoinTurnstile::new(ActionRecorder::new());
/// turnstile.coin();
/// turnstile.coin();
/// turnstile.pass();
///
/// assert_eq!(turnstile.actions().trace(), "UL");
/// assert_eq!(turnstile.state(), TurnstileState::Locked);
/// ```
pub struct TwoCoinTurnstile<A: TurnstileActions> {
    state: TurnstileState,
    table: TransitionTable,
    actions: A,
    history: TransitionHistory,
}

impl<A: TurnstileActions> TwoCoinTurnstile<A> {
    /// Create a locked turnstile using the standard two-coin table.
    ///
    /// History keeps the last [`TransitionHistory::DEFAULT_LIMIT`] records.
    pub fn new(actions: A) -> Self {
        Self::from_parts(
            actions,
            TransitionTable::two_coin(),
            TurnstileState::INITIAL,
            TransitionHistory::with_limit(TransitionHistory::DEFAULT_LIMIT),
        )
    }

    /// Start configuring a turnstile with a custom table or initial state.
    pub fn builder() -> TurnstileBuilder<A> {
        TurnstileBuilder::new()
    }

    pub(crate) fn from_parts(
        actions: A,
        table: TransitionTable,
        initial: TurnstileState,
        history: TransitionHistory,
    ) -> Self {
        Self {
            state: initial,
            table,
            actions,
            history,
        }
    }

    /// Inject a `Coin` event.
    pub fn coin(&mut self) {
        self.handle_event(Event::Coin);
    }

    /// Inject a `Pass` event.
    pub fn pass(&mut self) {
        self.handle_event(Event::Pass);
    }

    /// Resolve `event` against the table for the current state.
    ///
    /// When no rule exists the handler's `unexpected_transition` is called
    /// with the state and event names, and the state does not change.
    pub fn handle_event(&mut self, event: Event) {
        let from = self.state;

        let Some(rule) = self.table.lookup(from, event) else {
            warn!(state = %from, %event, "unexpected turnstile transition");
            self.actions.unexpected_transition(from.name(), event.name());
            self.history.record(TransitionRecord::new(
                from,
                from,
                event,
                Vec::new(),
                Outcome::Unexpected,
            ));
            return;
        };

        let next = rule.next;
        let actions = rule.actions.clone();
        debug!(state = %from, %event, %next, ?actions, "turnstile transition");

        self.dispatch(&actions);
        self.state = next;
        self.history.record(TransitionRecord::new(
            from,
            next,
            event,
            actions,
            Outcome::Handled,
        ));
    }

    /// Return to `Locked` regardless of the table.
    ///
    /// Silences the alarm first when leaving `Alarming`, then always locks.
    pub fn reset(&mut self) {
        let from = self.state;

        let mut actions = Vec::with_capacity(2);
        if from.is_alarming() {
            actions.push(Action::AlarmOff);
        }
        actions.push(Action::Lock);
        debug!(state = %from, ?actions, "turnstile reset");

        self.dispatch(&actions);
        self.state = TurnstileState::RESET;
        self.history.record(TransitionRecord::new(
            from,
            TurnstileState::RESET,
            Input::Reset,
            actions,
            Outcome::Handled,
        ));
    }

    /// Apply any input: a table event or a reset.
    pub fn handle(&mut self, input: Input) {
        match input {
            Input::Event(event) => self.handle_event(event),
            Input::Reset => self.reset(),
        }
    }

    fn dispatch(&mut self, actions: &[Action]) {
        for action in actions {
            action.invoke(&mut self.actions);
        }
    }

    pub fn state(&self) -> TurnstileState {
        self.state
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// The action handler supplied at construction.
    pub fn actions(&self) -> &A {
        &self.actions
    }

    pub fn actions_mut(&mut self) -> &mut A {
        &mut self.actions
    }

    /// Consume the machine and give the handler back.
    pub fn into_actions(self) -> A {
        self.actions
    }
}
