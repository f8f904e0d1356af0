use crate::types::alloc_type::format;
use crate::types::{OutcomeError, Variant};
use core::fmt::Debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of a fallible computation: either a success value or an error.
///
/// `Outcome<T, E>` carries the same information as [`Result`] but exposes a
/// combinator vocabulary of its own (`flat_map`, `filter`, `fold`, ...) and is
/// the value that call sites hand to the diagnostics layer. Values are never
/// mutated by combinators: every combinator consumes `self` and returns a new
/// `Outcome`, moving the untouched payload across instead of cloning it.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The error type
///
/// # Variants
///
/// * `Success(T)` - The computation produced a value
/// * `Failure(E)` - The computation failed with an error
///
/// # Examples
///
/// ```
/// use result_rail::Outcome;
///
/// fn divide(a: i32, b: i32) -> Outcome<i32, &'static str> {
///     if b == 0 {
///         Outcome::failure("Division by zero")
///     } else {
///         Outcome::success(a / b)
///     }
/// }
///
/// assert_eq!(divide(10, 2).map(|n| n * 2), Outcome::success(10));
/// assert_eq!(divide(10, 0).map(|n| n * 2), Outcome::failure("Division by zero"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a successful outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(5);
    /// assert!(o.is_success());
    /// assert_eq!(o.unwrap(), 5);
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("boom");
    /// assert!(o.is_failure());
    /// assert_eq!(o.unwrap_error(), "boom");
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Creates a successful outcome from a payload that may be absent.
    ///
    /// An absent payload carries no information, so it is rejected instead of
    /// being encoded inside the success branch. Use the error type for "no
    /// value".
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvariantViolation`] when `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Outcome, OutcomeError, Variant};
    ///
    /// assert_eq!(Outcome::<i32, &str>::try_success(Some(1)), Ok(Outcome::success(1)));
    /// assert_eq!(
    ///     Outcome::<i32, &str>::try_success(None),
    ///     Err(OutcomeError::InvariantViolation { variant: Variant::Success })
    /// );
    /// ```
    #[inline]
    pub fn try_success(value: Option<T>) -> Result<Self, OutcomeError> {
        value
            .map(Self::Success)
            .ok_or(OutcomeError::InvariantViolation { variant: Variant::Success })
    }

    /// Creates a failed outcome from an error that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvariantViolation`] when `error` is `None`.
    #[inline]
    pub fn try_failure(error: Option<E>) -> Result<Self, OutcomeError> {
        error
            .map(Self::Failure)
            .ok_or(OutcomeError::InvariantViolation { variant: Variant::Failure })
    }

    /// Returns `true` if the outcome holds a value.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome holds an error.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the discriminant of this outcome.
    #[must_use]
    #[inline]
    pub fn variant(&self) -> Variant {
        match self {
            Self::Success(_) => Variant::Success,
            Self::Failure(_) => Variant::Failure,
        }
    }

    /// Borrows both payloads, producing an `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Mutably borrows both payloads, producing an `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns the success value, or [`OutcomeError::UnwrapOnFailure`].
    ///
    /// # Errors
    ///
    /// Fails when called on a `Failure`; the error carries the `Debug` form of
    /// the failure payload.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, OutcomeError>
    where
        E: Debug,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => {
                Err(OutcomeError::UnwrapOnFailure { error: format!("{error:?}") })
            },
        }
    }

    /// Returns the error, or [`OutcomeError::UnwrapOnSuccess`].
    ///
    /// # Errors
    ///
    /// Fails when called on a `Success`; the error carries the `Debug` form of
    /// the success payload.
    #[inline]
    pub fn try_unwrap_error(self) -> Result<E, OutcomeError>
    where
        T: Debug,
    {
        match self {
            Self::Success(value) => {
                Err(OutcomeError::UnwrapOnSuccess { value: format!("{value:?}") })
            },
            Self::Failure(error) => Ok(error),
        }
    }

    /// Returns the success value.
    ///
    /// Meant for tests and prototypes. Prefer [`fold`](Self::fold),
    /// [`value_or`](Self::value_or) or [`value_or_raise`](Self::value_or_raise).
    ///
    /// # Panics
    ///
    /// Panics with the [`OutcomeError::UnwrapOnFailure`] message if the outcome
    /// is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use result_rail::Outcome;
    ///
    /// Outcome::<i32, &str>::failure("emergency failure").unwrap(); // panics
    /// ```
    #[track_caller]
    #[inline]
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics with the [`OutcomeError::UnwrapOnSuccess`] message if the outcome
    /// is a `Success`.
    #[track_caller]
    #[inline]
    pub fn unwrap_error(self) -> E
    where
        T: Debug,
    {
        match self.try_unwrap_error() {
            Ok(error) => error,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the success value, panicking with `msg` otherwise.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Failure`, with `msg` followed by the
    /// error's `Debug` form.
    #[track_caller]
    #[inline]
    pub fn expect(self, msg: &str) -> T
    where
        E: Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("{msg}: {error:?}"),
        }
    }

    /// Returns the error, panicking with `msg` otherwise.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Success`.
    #[track_caller]
    #[inline]
    pub fn expect_error(self, msg: &str) -> E
    where
        T: Debug,
    {
        match self {
            Self::Success(value) => panic!("{msg}: {value:?}"),
            Self::Failure(error) => error,
        }
    }

    /// Returns the success value or `default`.
    ///
    /// `default` is evaluated eagerly; use [`value_or_else`](Self::value_or_else)
    /// when building it is expensive.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    ///
    /// `fallback` only runs on the failure path.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let mut calls = 0;
    /// let v = Outcome::<i32, &str>::success(1).value_or_else(|_| {
    ///     calls += 1;
    ///     0
    /// });
    ///
    /// assert_eq!(v, 1);
    /// assert_eq!(calls, 0);
    /// ```
    #[inline]
    pub fn value_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => fallback(error),
        }
    }

    /// Returns the success value or `T::default()`.
    #[inline]
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }

    /// Returns the success value or raises a caller-built error.
    ///
    /// The failure payload is turned into `X` by `mapper` and returned as
    /// `Err`, ready for `?`.
    ///
    /// # Errors
    ///
    /// Returns `Err(mapper(error))` when the outcome is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct ApiError(String);
    ///
    /// fn load() -> Result<i32, ApiError> {
    ///     let n = Outcome::<i32, &str>::failure("offline")
    ///         .value_or_raise(|e| ApiError(e.to_string()))?;
    ///     Ok(n)
    /// }
    ///
    /// assert_eq!(load(), Err(ApiError("offline".into())));
    /// ```
    #[inline]
    pub fn value_or_raise<X, F>(self, mapper: F) -> Result<T, X>
    where
        F: FnOnce(E) -> X,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(mapper(error)),
        }
    }

    /// Maps the success value, moving a failure through unchanged.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the success value from type `T` to type `U`
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(5).map(|n| n * 2);
    /// assert_eq!(o, Outcome::success(10));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the error, moving a success through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let o = Outcome::<i32, u16>::failure(404).map_error(|code| format!("HTTP {code}"));
    /// assert_eq!(o, Outcome::failure("HTTP 404".to_string()));
    /// ```
    #[inline]
    pub fn map_error<F, G>(self, f: G) -> Outcome<T, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Maps the success value, or returns `default` for a failure.
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(_) => default,
        }
    }

    /// Maps whichever payload is present.
    #[inline]
    pub fn bimap<U, F, SuccessF, FailureF>(
        self,
        on_success: SuccessF,
        on_failure: FailureF,
    ) -> Outcome<U, F>
    where
        SuccessF: FnOnce(T) -> U,
        FailureF: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(on_success(value)),
            Self::Failure(error) => Outcome::Failure(on_failure(error)),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// `f` is only invoked for a success; a failure short-circuits.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// fn half(n: i32) -> Outcome<i32, &'static str> {
    ///     if n % 2 == 0 { Outcome::success(n / 2) } else { Outcome::failure("odd") }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).flat_map(half).flat_map(half), Outcome::success(2));
    /// assert_eq!(Outcome::success(6).flat_map(half).flat_map(half), Outcome::failure("odd"));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.flat_map(f)
    }

    /// Calls `recovery` with the error if the outcome is a failure.
    ///
    /// The dual of [`flat_map`](Self::flat_map): a success passes through
    /// without invoking `recovery`.
    #[inline]
    pub fn recover<F, G>(self, recovery: G) -> Outcome<T, F>
    where
        G: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => recovery(error),
        }
    }

    /// Runs `consumer` on the success value and returns `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let o = Outcome::<i32, &str>::success(3)
    ///     .on_success(|v| seen.push(*v))
    ///     .on_failure(|_| unreachable!());
    ///
    /// assert_eq!(o, Outcome::success(3));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[inline]
    pub fn on_success<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            consumer(value);
        }
        self
    }

    /// Runs `consumer` on the error and returns `self` unchanged.
    #[inline]
    pub fn on_failure<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            consumer(error);
        }
        self
    }

    /// Folds both branches into a single value.
    ///
    /// This is the canonical way to consume an outcome: both arms must be
    /// provided, so no case can be forgotten.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let message = Outcome::<&str, &str>::failure("bad password").fold(
    ///     |user| format!("Welcome back, {user}"),
    ///     |err| format!("Login failed: {err}"),
    /// );
    ///
    /// assert_eq!(message, "Login failed: bad password");
    /// ```
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Converts into an `Option` of the success value, discarding the error.
    #[must_use]
    #[inline]
    pub fn to_option(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into an `Option` of the error, discarding the success value.
    #[must_use]
    #[inline]
    pub fn to_option_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Re-validates a success value.
    ///
    /// A success whose value fails `predicate` becomes `Failure(error())`.
    /// `error` is only evaluated in that case. Failures pass through without
    /// calling either closure.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Condition the success value must satisfy
    /// * `error` - Lazily builds the error when the predicate does not hold
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let adult = Outcome::<u8, &str>::success(15).filter(|age| *age >= 18, || "too young");
    /// assert_eq!(adult, Outcome::failure("too young"));
    /// ```
    #[inline]
    pub fn filter<P, S>(self, predicate: P, error: S) -> Self
    where
        P: FnOnce(&T) -> bool,
        S: FnOnce() -> E,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(error())
                }
            },
            Self::Failure(err) => Self::Failure(err),
        }
    }

    /// Returns `other` if this is a success, otherwise propagates this failure.
    ///
    /// Sequences two independent operations: the success value of `self` is
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let connected = Outcome::<(), &str>::success(());
    /// assert_eq!(connected.and(Outcome::<i32, &str>::success(7)), Outcome::success(7));
    ///
    /// let offline = Outcome::<(), &str>::failure("offline");
    /// assert_eq!(offline.and(Outcome::<i32, &str>::success(7)), Outcome::failure("offline"));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Success(_) => other,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns `self` if it is a success, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => other,
        }
    }

    /// Converts into a standard [`Result`].
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}
