//! Turnstile states and the events that drive them.
//!
//! Both enums are plain tags. Their names are part of the observable
//! contract: `unexpected_transition` reports them verbatim.

use crate::named_enum;

named_enum! {
    /// Position of the turnstile in its transition table.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::TurnstileState;
    ///
    /// assert_eq!(TurnstileState::INITIAL, TurnstileState::Locked);
    /// assert_eq!(TurnstileState::Alarming.name(), "Alarming");
    /// assert!(TurnstileState::Alarming.is_alarming());
    /// ```
    pub enum TurnstileState {
        /// Closed, waiting for payment. Every machine starts here.
        Locked,
        /// One coin accepted while locked, waiting for the second.
        FirstCoin,
        /// Paid and open.
        Unlocked,
        /// Someone passed without paying.
        Alarming,
    }
    unknown: UnknownState
}

impl TurnstileState {
    /// State of a freshly constructed machine.
    pub const INITIAL: TurnstileState = TurnstileState::Locked;

    /// State every reset lands in.
    pub const RESET: TurnstileState = TurnstileState::Locked;

    pub fn is_alarming(&self) -> bool {
        matches!(self, Self::Alarming)
    }
}

impl Default for TurnstileState {
    fn default() -> Self {
        Self::INITIAL
    }
}

named_enum! {
    /// External stimulus looked up in the transition table.
    ///
    /// Reset is deliberately absent: it is an administrative command that
    /// bypasses the table.
    pub enum Event {
        Coin,
        Pass,
    }
    unknown: UnknownEvent
}
