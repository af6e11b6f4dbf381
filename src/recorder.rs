//! A handler that records what the machine asked it to do.
//!
//! Traces use one letter per action (`L`ock, `U`nlock, `T`hankyou,
//! `A`larm on, alarm `O`ff) and `X(state,event)` for unexpected transitions,
//! so a whole run can be asserted as a single string.

use crate::core::{Action, TurnstileActions};
use serde::{Deserialize, Serialize};

/// One call made on a handler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Invocation {
    Action(Action),
    Unexpected { state: String, event: String },
}

/// Handler that stores every invocation in order.
///
/// # Example
///
/// ```rust
/// use turnstile::{ActionRecorder, TwoCoinTurnstile};
///
/// let mut turnstile = TwoCoinTurnstile::new(ActionRecorder::new());
/// turnstile.pass();
/// turnstile.pass();
///
/// assert_eq!(turnstile.actions().trace(), "AX(Alarming,Pass)");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionRecorder {
    invocations: Vec<Invocation>,
}

impl ActionRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    /// Table actions only, in order; unexpected transitions are skipped.
    pub fn actions(&self) -> Vec<Action> {
        self.invocations
            .iter()
            .filter_map(|invocation| match invocation {
                Invocation::Action(action) => Some(*action),
                Invocation::Unexpected { .. } => None,
            })
            .collect()
    }

    /// Render the invocations as a trace string.
    pub fn trace(&self) -> String {
        let mut trace = String::new();
        for invocation in &self.invocations {
            match invocation {
                Invocation::Action(action) => trace.push(symbol(*action)),
                Invocation::Unexpected { state, event } => {
                    trace.push_str(&format!("X({state},{event})"));
                }
            }
        }
        trace
    }

    pub fn clear(&mut self) {
        self.invocations.clear();
    }

    fn push(&mut self, action: Action) {
        self.invocations.push(Invocation::Action(action));
    }
}

fn symbol(action: Action) -> char {
    match action {
        Action::Lock => 'L',
        Action::Unlock => 'U',
        Action::Thankyou => 'T',
        Action::AlarmOn => 'A',
        Action::AlarmOff => 'O',
    }
}

impl TurnstileActions for ActionRecorder {
    fn lock(&mut self) {
        self.push(Action::Lock);
    }

    fn unlock(&mut self) {
        self.push(Action::Unlock);
    }

    fn thankyou(&mut self) {
        self.push(Action::Thankyou);
    }

    fn alarm_on(&mut self) {
        self.push(Action::AlarmOn);
    }

    fn alarm_off(&mut self) {
        self.push(Action::AlarmOff);
    }

    fn unexpected_transition(&mut self, state: &str, event: &str) {
        self.invocations.push(Invocation::Unexpected {
            state: state.to_owned(),
            event: event.to_owned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_uses_one_letter_per_action() {
        let mut recorder = ActionRecorder::new();
        for action in Action::ALL {
            action.invoke(&mut recorder);
        }

        assert_eq!(recorder.trace(), "LUTAO");
    }

    #[test]
    fn unexpected_transitions_render_with_names() {
        let mut recorder = ActionRecorder::new();
        recorder.alarm_on();
        recorder.unexpected_transition("Alarming", "Pass");

        assert_eq!(recorder.trace(), "AX(Alarming,Pass)");
        assert_eq!(recorder.actions(), vec![Action::AlarmOn]);

        recorder.unexpected_transition("FirstCoin", "Coin");
        assert_eq!(recorder.trace(), "AX(Alarming,Pass)X(FirstCoin,Coin)");
        assert_eq!(
            recorder.invocations()[1],
            Invocation::Unexpected {
                state: "Alarming".to_string(),
                event: "Pass".to_string(),
            }
        );
    }

    #[test]
    fn clear_forgets_everything() {
        let mut recorder = ActionRecorder::new();
        recorder.lock();
        recorder.clear();

        assert!(recorder.invocations().is_empty());
        assert_eq!(recorder.trace(), "");
    }
}
