//! A two-track `Outcome<T, E>` (Success or Failure) with a combinator
//! vocabulary, plus opt-in call-site diagnostics: functions declare at startup
//! whether the outcomes they construct are logged and which recovery function
//! runs on failure.
//!
//! The core is `no_std` (with `alloc`); diagnostics require the default `std`
//! feature.
//!
//! # Examples
//!
//! ## Success or Failure
//!
//! ```
//! use result_rail::Outcome;
//!
//! fn divide(a: i32, b: i32) -> Outcome<i32, &'static str> {
//!     if b == 0 {
//!         return Outcome::failure("Division by zero");
//!     }
//!     Outcome::success(a / b)
//! }
//!
//! assert_eq!(divide(10, 2).map(|n| n * 2), Outcome::success(10));
//! assert_eq!(divide(10, 0).map(|n| n * 2), Outcome::failure("Division by zero"));
//!
//! let message = divide(10, 0).fold(|n| n.to_string(), |err| err.to_string());
//! assert_eq!(message, "Division by zero");
//! ```
//!
//! ## Call-Site Diagnostics
//!
//! ```
//! use result_rail::diagnostics::{DiagnosticPolicy, FunctionKey, PolicyRegistry};
//! use result_rail::{failure, Outcome};
//!
//! fn find_by_email(email: Option<&str>) -> Outcome<u32, &'static str> {
//!     match email {
//!         Some(_) => Outcome::success(1),
//!         None => failure!("User not found", arity = 1),
//!     }
//! }
//!
//! fn main() {
//!     PolicyRegistry::new()
//!         .declare(
//!             FunctionKey::new(module_path!(), "find_by_email", 1),
//!             DiagnosticPolicy::logged(),
//!         )
//!         .install()
//!         .unwrap();
//!
//!     // prints "[<line>] find_by_email() -> Failure(User not found)"
//!     assert!(find_by_email(None).is_failure());
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Outcome, Result and Option
pub mod convert;
/// Call-site macros for diagnostics-aware construction
pub mod macros;
/// The Outcome type and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for standard library types
pub mod traits;
/// Variant discriminant and error types
pub mod types;

/// Call-site diagnostics: policies, registry, dispatcher (requires `std` feature)
#[cfg(feature = "std")]
pub mod diagnostics;

pub use convert::*;
pub use outcome::Outcome;
pub use traits::*;
pub use types::{OutcomeError, Variant};
