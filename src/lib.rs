//! Turnstile: a table-driven two-coin turnstile state machine.
//!
//! The machine resolves every input against an immutable transition table
//! and reports its effects through an injected [`TurnstileActions`] handler.
//! It has no other output channel.
//!
//! # Core Concepts
//!
//! - **States and events**: [`TurnstileState`] and [`Event`], plain tags with
//!   stable names
//! - **Transition table**: [`TransitionTable`] maps `(state, event)` to ordered
//!   [`Action`]s and a next state; pairs without a rule are reported through
//!   `unexpected_transition` and never fail
//! - **Reset**: an unconditional command that bypasses the table
//! - **History**: recent inputs are recorded in a capped [`TransitionHistory`]
//!
//! # Example
//!
//! ```rust
//! use turnstile::{ActionRecorder, TwoCoinTurnstile};
//!
//! let mut turnstile = TwoCoinTurnstile::new(ActionRecorder::new());
//! turnstile.coin();
//! turnstile.coin();
//! turnstile.pass();
//! turnstile.coin();
//! turnstile.coin();
//! turnstile.coin();
//! turnstile.pass();
//! turnstile.pass();
//!
//! assert_eq!(turnstile.actions().trace(), "ULUTLA");
//! ```

pub mod builder;
pub mod core;
mod error;
mod machine;
mod macros;
pub mod recorder;
pub mod table;

// Re-export commonly used types
pub use builder::{BuildError, TurnstileBuilder};
pub use crate::core::{
    Action, Event, Input, Outcome, TransitionHistory, TransitionRecord, TurnstileActions,
    TurnstileState,
};
pub use error::ParseError;
pub use machine::TwoCoinTurnstile;
pub use recorder::{ActionRecorder, Invocation};
pub use table::{Rule, TableError, TransitionTable};
