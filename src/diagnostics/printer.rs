//! The one-line diagnostic format.
use core::fmt::{self, Display};
use std::io::{self, Write};

use crate::diagnostics::frame::CallFrame;
use crate::outcome::Outcome;

/// A diagnostic line: `[<line>] <function>() -> <Success(..)|Failure(..)>`.
///
/// # Examples
///
/// ```
/// use result_rail::diagnostics::{CallFrame, DiagnosticLine};
/// use result_rail::Outcome;
///
/// let frame = CallFrame::new("app", "divide", 14, Some(2));
/// let outcome = Outcome::<i32, &str>::failure("Division by zero");
///
/// assert_eq!(
///     DiagnosticLine::new(&frame, &outcome).to_string(),
///     "[14] divide() -> Failure(Division by zero)"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticLine<'a, T, E> {
    frame: &'a CallFrame,
    outcome: &'a Outcome<T, E>,
}

impl<'a, T, E> DiagnosticLine<'a, T, E> {
    #[inline]
    pub fn new(frame: &'a CallFrame, outcome: &'a Outcome<T, E>) -> Self {
        Self { frame, outcome }
    }
}

impl<T: Display, E: Display> Display for DiagnosticLine<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}() -> {}", self.frame.line(), self.frame.function(), self.outcome)
    }
}

/// Writes `line` followed by a newline in a single write call.
pub(crate) fn emit<W, T, E>(out: &mut W, line: &DiagnosticLine<'_, T, E>) -> io::Result<()>
where
    W: Write,
    T: Display,
    E: Display,
{
    writeln!(out, "{line}")
}
