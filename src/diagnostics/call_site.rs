use core::fmt::Display;

use crate::diagnostics::dispatch::Dispatcher;
use crate::diagnostics::frame::CallFrame;
use crate::outcome::Outcome;

/// Policy-aware construction point for [`Outcome`] values.
///
/// A `CallSite` knows the frame it was created in. Every outcome built or
/// observed through it is handed to the installed registry's dispatcher
/// before being returned unchanged. Without an installed registry the call
/// site behaves exactly like the plain constructors.
///
/// Usually created with [`call_site!`](crate::call_site), or implicitly by
/// [`success!`](crate::success) and [`failure!`](crate::failure).
///
/// Both payload types must implement `Display`, because a declared policy may
/// print them in the tagged form. Payloads such as `()` or `Vec<T>` cannot go
/// through a call site; construct them with [`Outcome::success`] /
/// [`Outcome::failure`], or map them to a printable value first (for example
/// `success!("done")` instead of `success!(())`).
///
/// # Examples
///
/// ```
/// use result_rail::{call_site, Outcome};
///
/// fn divide(a: i32, b: i32) -> Outcome<i32, &'static str> {
///     let site = call_site!(arity = 2);
///     if b == 0 {
///         site.failure("Division by zero")
///     } else {
///         site.success(a / b)
///     }
/// }
///
/// assert_eq!(divide(10, 2), Outcome::success(5));
/// assert_eq!(divide(10, 0), Outcome::failure("Division by zero"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallSite {
    frame: CallFrame,
}

impl CallSite {
    #[inline]
    pub const fn new(frame: CallFrame) -> Self {
        Self { frame }
    }

    #[inline]
    pub const fn frame(&self) -> &CallFrame {
        &self.frame
    }

    /// Constructs a success and dispatches it.
    #[inline]
    pub fn success<T, E>(&self, value: T) -> Outcome<T, E>
    where
        T: Display,
        E: Display,
    {
        self.observe(Outcome::success(value))
    }

    /// Constructs a failure and dispatches it.
    #[inline]
    pub fn failure<T, E>(&self, error: E) -> Outcome<T, E>
    where
        T: Display,
        E: Display,
    {
        self.observe(Outcome::failure(error))
    }

    /// Dispatches an outcome built elsewhere as if it had been constructed
    /// here, then returns it.
    pub fn observe<T, E>(&self, outcome: Outcome<T, E>) -> Outcome<T, E>
    where
        T: Display,
        E: Display,
    {
        if let Some(dispatcher) = Dispatcher::installed() {
            dispatcher.dispatch(&self.frame, &outcome);
        }
        outcome
    }

    /// Like [`observe`](Self::observe), but against an explicit dispatcher
    /// instead of the installed registry.
    pub fn observe_with<T, E>(&self, dispatcher: &Dispatcher<'_>, outcome: Outcome<T, E>) -> Outcome<T, E>
    where
        T: Display,
        E: Display,
    {
        dispatcher.dispatch(&self.frame, &outcome);
        outcome
    }
}
