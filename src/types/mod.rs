//! Shared types: the variant discriminant and the error taxonomy.
//!
//! # Examples
//!
//! ```
//! use result_rail::{Outcome, OutcomeError, Variant};
//!
//! let missing: Option<i32> = None;
//! let err = Outcome::<i32, &str>::try_success(missing).unwrap_err();
//!
//! assert_eq!(err, OutcomeError::InvariantViolation { variant: Variant::Success });
//! ```
use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod alloc_type;
pub mod error;

pub use error::*;

/// Discriminant of an [`Outcome`](crate::Outcome).
///
/// Used by diagnostic policies to decide whether a construction event
/// qualifies for logging, and by error messages to name the offending side.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    Success,
    Failure,
}

impl Variant {
    /// Tag used in the tagged string form, e.g. `Success(5)`.
    #[inline]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failure => "Failure",
        }
    }
}

impl fmt::Display for Variant {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
