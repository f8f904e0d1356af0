//! Extension trait bridging standard `Result`s into [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use result_rail::traits::ResultExt;
//! use result_rail::Outcome;
//!
//! let port = "8080".parse::<u16>().into_outcome();
//! assert_eq!(port, Outcome::success(8080));
//! ```

use crate::outcome::Outcome;
#[cfg(feature = "std")]
use crate::diagnostics::CallSite;
#[cfg(feature = "std")]
use core::fmt::Display;

/// Converts a `Result` into an [`Outcome`], optionally through a call site.
///
/// # Examples
///
/// ```
/// use result_rail::traits::ResultExt;
/// use result_rail::{call_site, Outcome};
///
/// fn read_limit(raw: &str) -> Outcome<u32, std::num::ParseIntError> {
///     raw.parse::<u32>().traced(&call_site!(arity = 1))
/// }
///
/// assert_eq!(read_limit("10"), Outcome::success(10));
/// assert!(read_limit("ten").is_failure());
/// ```
pub trait ResultExt<T, E> {
    /// Converts into an `Outcome` without any diagnostics.
    fn into_outcome(self) -> Outcome<T, E>;

    /// Converts into an `Outcome` and dispatches it at `site`.
    ///
    /// Requires `Display` on both sides, like every
    /// [`CallSite`](crate::diagnostics::CallSite) constructor.
    #[cfg(feature = "std")]
    fn traced(self, site: &CallSite) -> Outcome<T, E>
    where
        T: Display,
        E: Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }

    #[cfg(feature = "std")]
    #[inline]
    fn traced(self, site: &CallSite) -> Outcome<T, E>
    where
        T: Display,
        E: Display,
    {
        site.observe(self.into_outcome())
    }
}
