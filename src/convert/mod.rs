//! Conversions between [`Outcome`], `Result` and `Option`.
//!
//! These adapters make it straightforward to adopt `Outcome` incrementally:
//! wrap the `Result`s produced by existing code, and hand plain `Result`s back
//! to APIs that expect them.
//!
//! # Examples
//!
//! ```
//! use result_rail::Outcome;
//! use result_rail::convert::*;
//!
//! let parsed: Outcome<i32, _> = "42".parse::<i32>().into();
//! assert!(parsed.is_success());
//!
//! let back: Result<i32, &str> = outcome_to_result(Outcome::failure("nope"));
//! assert_eq!(back, Err("nope"));
//! ```

use crate::outcome::Outcome;

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result_to_outcome(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// Converts a `Result` into an `Outcome`.
///
/// # Examples
///
/// ```
/// use result_rail::{convert::result_to_outcome, Outcome};
///
/// assert_eq!(result_to_outcome(Ok::<i32, &str>(1)), Outcome::success(1));
/// assert_eq!(result_to_outcome(Err::<i32, &str>("e")), Outcome::failure("e"));
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    match result {
        Ok(value) => Outcome::Success(value),
        Err(error) => Outcome::Failure(error),
    }
}

/// Converts an `Outcome` into a `Result`.
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

/// Converts an `Option` into an `Outcome`, building the error lazily.
///
/// # Arguments
///
/// * `option` - The optional value
/// * `error` - Builds the failure payload when `option` is `None`
///
/// # Examples
///
/// ```
/// use result_rail::{convert::option_to_outcome, Outcome};
///
/// let found = option_to_outcome(None::<u32>, || "User not found");
/// assert_eq!(found, Outcome::failure("User not found"));
/// ```
#[inline]
pub fn option_to_outcome<T, E, F>(option: Option<T>, error: F) -> Outcome<T, E>
where
    F: FnOnce() -> E,
{
    match option {
        Some(value) => Outcome::Success(value),
        None => Outcome::Failure(error()),
    }
}

impl<T, E> Outcome<Option<T>, E> {
    /// Turns an `Outcome` of an `Option` into an `Option` of an `Outcome`.
    ///
    /// `Success(None)` maps to `None`; `Success(Some(v))` to
    /// `Some(Success(v))`; `Failure(e)` to `Some(Failure(e))`.
    #[inline]
    pub fn transpose(self) -> Option<Outcome<T, E>> {
        match self {
            Outcome::Success(Some(value)) => Some(Outcome::Success(value)),
            Outcome::Success(None) => None,
            Outcome::Failure(error) => Some(Outcome::Failure(error)),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::success(Outcome::failure("inner"));
    /// assert_eq!(nested.flatten(), Outcome::failure("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.flat_map(|inner| inner)
    }
}
