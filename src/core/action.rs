//! Table actions and the handler capability that performs them.

use crate::named_enum;

/// Side effects the turnstile asks its environment to perform.
///
/// Every method is invoked synchronously, in table order, while an event is
/// being handled. The machine never inspects the handler beyond calling it.
///
/// The trait is implemented for `&mut T` and `Box<T>`, so a caller can lend
/// a handler it keeps owning:
///
/// ```rust
/// use turnstile::{ActionRecorder, TwoCoinTurnstile};
///
/// let mut recorder = ActionRecorder::new();
/// {
///     let mut turnstile = TwoCoinTurnstile::new(&mut recorder);
///     turnstile.pass();
/// }
/// assert_eq!(recorder.trace(), "A");
/// ```
pub trait TurnstileActions {
    fn lock(&mut self);

    fn unlock(&mut self);

    fn thankyou(&mut self);

    fn alarm_on(&mut self);

    fn alarm_off(&mut self);

    /// Called when the current state has no rule for `event`.
    ///
    /// Receives the names of the state and the event. The machine stays in
    /// its current state afterwards.
    fn unexpected_transition(&mut self, state: &str, event: &str);
}

impl<T: TurnstileActions + ?Sized> TurnstileActions for &mut T {
    fn lock(&mut self) {
        (**self).lock()
    }

    fn unlock(&mut self) {
        (**self).unlock()
    }

    fn thankyou(&mut self) {
        (**self).thankyou()
    }

    fn alarm_on(&mut self) {
        (**self).alarm_on()
    }

    fn alarm_off(&mut self) {
        (**self).alarm_off()
    }

    fn unexpected_transition(&mut self, state: &str, event: &str) {
        (**self).unexpected_transition(state, event)
    }
}

impl<T: TurnstileActions + ?Sized> TurnstileActions for Box<T> {
    fn lock(&mut self) {
        (**self).lock()
    }

    fn unlock(&mut self) {
        (**self).unlock()
    }

    fn thankyou(&mut self) {
        (**self).thankyou()
    }

    fn alarm_on(&mut self) {
        (**self).alarm_on()
    }

    fn alarm_off(&mut self) {
        (**self).alarm_off()
    }

    fn unexpected_transition(&mut self, state: &str, event: &str) {
        (**self).unexpected_transition(state, event)
    }
}

named_enum! {
    /// An action that may appear in a transition rule.
    ///
    /// `unexpected_transition` is not listed: it is the fallback for pairs
    /// without a rule, never part of one.
    pub enum Action {
        Lock,
        Unlock,
        Thankyou,
        AlarmOn,
        AlarmOff,
    }
    unknown: UnknownAction
}

impl Action {
    /// Perform this action on `handler`.
    pub fn invoke<H: TurnstileActions + ?Sized>(self, handler: &mut H) {
        match self {
            Self::Lock => handler.lock(),
            Self::Unlock => handler.unlock(),
            Self::Thankyou => handler.thankyou(),
            Self::AlarmOn => handler.alarm_on(),
            Self::AlarmOff => handler.alarm_off(),
        }
    }
}
