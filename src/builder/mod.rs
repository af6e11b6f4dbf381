//! Builder API for configuring a turnstile.
//!
//! The builder is the only configuration surface: a handler is required,
//! the table and initial state fall back to the two-coin defaults.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::TurnstileBuilder;
