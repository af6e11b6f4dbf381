//! The immutable transition table.
//!
//! A table maps `(state, event)` to the ordered actions to invoke and the
//! next state. Pairs without a rule are not lookup failures: the machine
//! reports them through `unexpected_transition`.
//!
//! # Example
//!
//! ```rust
//! use turnstile::{Action, Event, TransitionTable, TurnstileState};
//!
//! let table = TransitionTable::two_coin();
//!
//! let rule = table.lookup(TurnstileState::FirstCoin, Event::Coin).unwrap();
//! assert_eq!(rule.actions, vec![Action::Unlock]);
//! assert_eq!(rule.next, TurnstileState::Unlocked);
//!
//! assert!(table.lookup(TurnstileState::Alarming, Event::Pass).is_none());
//! ```

mod validation;

pub use validation::TableError;

use crate::core::{Action, Event, TurnstileState};
use serde::{Deserialize, Serialize};

/// One row of a transition table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub state: TurnstileState,
    pub event: Event,
    pub actions: Vec<Action>,
    pub next: TurnstileState,
}

impl Rule {
    pub fn new(
        state: TurnstileState,
        event: Event,
        actions: &[Action],
        next: TurnstileState,
    ) -> Self {
        Self {
            state,
            event,
            actions: actions.to_vec(),
            next,
        }
    }

    /// Whether this rule applies to `state` receiving `event`.
    pub fn matches(&self, state: TurnstileState, event: Event) -> bool {
        self.state == state && self.event == event
    }
}

/// Ordered set of rules. Never mutated after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTable {
    rules: Vec<Rule>,
}

impl TransitionTable {
    /// The two-coin turnstile.
    ///
    /// | State     | Event | Actions            | Next      |
    /// |-----------|-------|--------------------|-----------|
    /// | Locked    | Coin  |                    | FirstCoin |
    /// | Locked    | Pass  | alarmOn            | Alarming  |
    /// | FirstCoin | Coin  | unlock             | Unlocked  |
    /// | FirstCoin | Pass  | alarmOn            | Alarming  |
    /// | Unlocked  | Coin  | thankyou           | Unlocked  |
    /// | Unlocked  | Pass  | lock               | Locked    |
    /// | Alarming  | Coin  | alarmOff, unlock   | Unlocked  |
    ///
    /// `Alarming` has no rule for `Pass`.
    pub fn two_coin() -> Self {
        use Action::*;
        use Event::*;
        use crate::core::TurnstileState::*;

        Self::from_rules(vec![
            Rule::new(Locked, Coin, &[], FirstCoin),
            Rule::new(Locked, Pass, &[AlarmOn], Alarming),
            Rule::new(FirstCoin, Coin, &[Unlock], Unlocked),
            Rule::new(FirstCoin, Pass, &[AlarmOn], Alarming),
            Rule::new(Unlocked, Coin, &[Thankyou], Unlocked),
            Rule::new(Unlocked, Pass, &[Lock], Locked),
            Rule::new(Alarming, Coin, &[AlarmOff, Unlock], Unlocked),
        ])
    }

    /// Build a table from explicit rules.
    ///
    /// The rules are not checked here; see [`TransitionTable::validate`].
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Find the rule for `state` receiving `event`.
    ///
    /// If a table holds duplicates the first one wins, but such a table is
    /// rejected by validation before any machine uses it.
    pub fn lookup(&self, state: TurnstileState, event: Event) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(state, event))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::two_coin()
    }
}
