//! Property-based tests for the turnstile.
//!
//! These tests use proptest to drive machines with arbitrary input
//! sequences and check the table contract holds at every step.

use proptest::prelude::*;
use turnstile::{
    Action, ActionRecorder, Event, Input, Invocation, Outcome, TransitionTable, TurnstileState,
    TwoCoinTurnstile,
};

prop_compose! {
    fn arbitrary_state()(variant in 0..4u8) -> TurnstileState {
        match variant {
            0 => TurnstileState::Locked,
            1 => TurnstileState::FirstCoin,
            2 => TurnstileState::Unlocked,
            _ => TurnstileState::Alarming,
        }
    }
}

prop_compose! {
    fn arbitrary_input()(variant in 0..5u8) -> Input {
        match variant {
            0 | 1 => Input::Event(Event::Coin),
            2 | 3 => Input::Event(Event::Pass),
            _ => Input::Reset,
        }
    }
}

/// Drive a fresh machine to `state` using only table events.
fn machine_in(state: TurnstileState) -> TwoCoinTurnstile<ActionRecorder> {
    let mut machine = TwoCoinTurnstile::new(ActionRecorder::new());
    let path: &[Event] = match state {
        TurnstileState::Locked => &[],
        TurnstileState::FirstCoin => &[Event::Coin],
        TurnstileState::Unlocked => &[Event::Coin, Event::Coin],
        TurnstileState::Alarming => &[Event::Pass],
    };
    for event in path {
        machine.handle_event(*event);
    }
    machine.actions_mut().clear();
    machine
}

proptest! {
    #[test]
    fn defined_rules_are_deterministic(state in arbitrary_state(), coin in any::<bool>()) {
        let event = if coin { Event::Coin } else { Event::Pass };
        let table = TransitionTable::two_coin();

        let mut first = machine_in(state);
        let mut second = machine_in(state);
        first.handle_event(event);
        second.handle_event(event);

        prop_assert_eq!(first.state(), second.state());
        prop_assert_eq!(first.actions().invocations(), second.actions().invocations());

        match table.lookup(state, event) {
            Some(rule) => {
                prop_assert_eq!(first.state(), rule.next);
                prop_assert_eq!(first.actions().actions(), rule.actions.clone());
            }
            None => {
                prop_assert_eq!(first.state(), state);
                prop_assert_eq!(
                    first.actions().invocations().to_vec(),
                    vec![Invocation::Unexpected {
                        state: state.name().to_string(),
                        event: event.name().to_string(),
                    }]
                );
            }
        }
    }

    #[test]
    fn repeated_undefined_events_leave_state_alone(repeats in 1..10usize) {
        let mut machine = machine_in(TurnstileState::Alarming);
        for _ in 0..repeats {
            machine.pass();
        }

        prop_assert_eq!(machine.state(), TurnstileState::Alarming);
        prop_assert_eq!(machine.actions().invocations().len(), repeats);
        prop_assert_eq!(machine.history().unexpected_count(), repeats);
    }

    #[test]
    fn reset_always_locks(
        prefix in prop::collection::vec(arbitrary_input(), 0..20)
    ) {
        let mut machine = TwoCoinTurnstile::new(ActionRecorder::new());
        for input in &prefix {
            machine.handle(*input);
        }
        let was_alarming = machine.state().is_alarming();
        machine.actions_mut().clear();

        machine.reset();

        let expected = if was_alarming {
            vec![Action::AlarmOff, Action::Lock]
        } else {
            vec![Action::Lock]
        };
        prop_assert_eq!(machine.state(), TurnstileState::Locked);
        prop_assert_eq!(machine.actions().actions(), expected);
    }

    #[test]
    fn history_records_every_input(
        inputs in prop::collection::vec(arbitrary_input(), 0..30)
    ) {
        let mut machine = TwoCoinTurnstile::new(ActionRecorder::new());
        for input in &inputs {
            machine.handle(*input);
        }

        let history = machine.history();
        prop_assert_eq!(history.len(), inputs.len());

        let recorded: Vec<Action> = history
            .records()
            .flat_map(|record| record.actions.iter().copied())
            .collect();
        prop_assert_eq!(recorded, machine.actions().actions());

        for (record, input) in history.records().zip(&inputs) {
            prop_assert_eq!(record.input, *input);
            if record.outcome == Outcome::Unexpected {
                prop_assert_eq!(record.from, record.to);
                prop_assert!(record.actions.is_empty());
            }
        }

        if let Some(last) = history.last() {
            prop_assert_eq!(last.to, machine.state());
        }
    }

    #[test]
    fn history_never_exceeds_its_limit(
        limit in 0..8usize,
        inputs in prop::collection::vec(arbitrary_input(), 0..64)
    ) {
        let mut machine = TwoCoinTurnstile::builder()
            .actions(ActionRecorder::new())
            .history_limit(limit)
            .build()
            .unwrap();
        for input in &inputs {
            machine.handle(*input);
            prop_assert!(machine.history().len() <= limit);
        }

        let history = machine.history();
        prop_assert_eq!(history.len(), inputs.len().min(limit));
        let retained = &inputs[inputs.len() - history.len()..];
        for (record, input) in history.records().zip(retained) {
            prop_assert_eq!(record.input, *input);
        }
    }

    #[test]
    fn state_name_roundtrips(state in arbitrary_state()) {
        let parsed: TurnstileState = state.name().parse().unwrap();
        prop_assert_eq!(parsed, state);
    }
}
