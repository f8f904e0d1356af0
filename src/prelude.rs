//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use result_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Outcome`], [`OutcomeError`], [`Variant`]
//! - **Traits**: [`ResultExt`]
//! - **With `std`**: the [`call_site!`], [`success!`] and [`failure!`] macros,
//!   [`DiagnosticPolicy`], [`FunctionKey`] and [`PolicyRegistry`]
//!
//! # Examples
//!
//! ```
//! use result_rail::prelude::*;
//!
//! fn parse(raw: &str) -> Outcome<u8, String> {
//!     raw.parse::<u8>()
//!         .into_outcome()
//!         .map_error(|e| e.to_string())
//!         .filter(|n| *n > 0, || "must be positive".to_string())
//! }
//!
//! assert_eq!(parse("7"), Outcome::success(7));
//! assert_eq!(parse("0"), Outcome::failure("must be positive".to_string()));
//! ```

// Core types
pub use crate::outcome::Outcome;
pub use crate::types::{OutcomeError, Variant};

// Traits
pub use crate::traits::ResultExt;

// Diagnostics
#[cfg(feature = "std")]
pub use crate::diagnostics::{DiagnosticPolicy, FunctionKey, PolicyRegistry};
#[cfg(feature = "std")]
pub use crate::{call_site, failure, success};
