//! Errors surfaced by the outcome core.
//!
//! Only correctness-affecting misuse shows up here. Failures inside the
//! diagnostics layer never leave the dispatcher.
use crate::types::alloc_type::String;
use crate::types::Variant;

/// Misuse of the [`Outcome`](crate::Outcome) API.
///
/// Returned by the fallible constructors and by the `try_unwrap*` accessors.
/// The panicking accessors (`unwrap`, `unwrap_error`) panic with the
/// `Display` form of the matching variant.
///
/// # Examples
///
/// ```
/// use result_rail::{Outcome, OutcomeError};
///
/// let failed = Outcome::<i32, &str>::failure("Division by zero");
/// let err = failed.try_unwrap().unwrap_err();
///
/// assert_eq!(
///     err,
///     OutcomeError::UnwrapOnFailure { error: "\"Division by zero\"".into() }
/// );
/// assert!(err.to_string().contains("Division by zero"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutcomeError {
    /// A variant was constructed from an absent payload.
    #[error("{variant} payload cannot be absent")]
    InvariantViolation { variant: Variant },

    /// `unwrap` was called on a `Failure`; carries the error's `Debug` form.
    #[error("called `Outcome::unwrap()` on a `Failure` value: {error}")]
    UnwrapOnFailure { error: String },

    /// `unwrap_error` was called on a `Success`; carries the value's `Debug` form.
    #[error("called `Outcome::unwrap_error()` on a `Success` value: {value}")]
    UnwrapOnSuccess { value: String },
}

impl OutcomeError {
    /// The variant the failing operation was looking at.
    #[inline]
    pub fn variant(&self) -> Variant {
        match self {
            Self::InvariantViolation { variant } => *variant,
            Self::UnwrapOnFailure { .. } => Variant::Failure,
            Self::UnwrapOnSuccess { .. } => Variant::Success,
        }
    }
}
