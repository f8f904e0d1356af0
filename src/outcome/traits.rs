use crate::outcome::core::Outcome;
use core::fmt::{self, Display};

/// Tagged string form: `Success(value)` or `Failure(error)`.
///
/// This is the form the diagnostic printer writes after the `->` arrow.
///
/// # Examples
///
/// ```
/// use result_rail::Outcome;
///
/// assert_eq!(Outcome::<i32, &str>::success(5).to_string(), "Success(5)");
/// assert_eq!(Outcome::<i32, &str>::failure("x").to_string(), "Failure(x)");
/// ```
impl<T: Display, E: Display> Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "{}({})", self.variant(), value),
            Self::Failure(error) => write!(f, "{}({})", self.variant(), error),
        }
    }
}
