//! The [`Outcome`] type: a success value or an error, never both.
//!
//! # Key Components
//!
//! - [`Outcome`] - Core two-variant type with its combinators
//! - Iterator adapters over the success value and fail-fast collection
//! - `Display` in tagged form (`Success(..)` / `Failure(..)`)
//!
//! # Examples
//!
//! ```
//! use result_rail::Outcome;
//!
//! let greeting = Outcome::<&str, &str>::success("Alice")
//!     .map(|name| format!("Hello {name}"))
//!     .value_or_else(|_| "Hello Guest".to_string());
//!
//! assert_eq!(greeting, "Hello Alice");
//! ```
pub mod core;
pub mod iter;
mod traits;

pub use self::core::*;
pub use self::iter::*;
