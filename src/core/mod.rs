//! Core turnstile types.
//!
//! This module contains the vocabulary of the machine:
//! - States and events, with stable textual names
//! - Table actions and the `TurnstileActions` handler capability
//! - The transition history kept by every machine

mod action;
mod history;
mod state;

pub use action::{Action, TurnstileActions};
pub use history::{Input, Outcome, TransitionHistory, TransitionRecord};
pub use state::{Event, TurnstileState};
