//! Call-site diagnostics for [`Outcome`](crate::Outcome) construction.
//!
//! Functions declare, once at startup, whether the outcomes they construct
//! should be logged and which recovery function should run when they
//! construct a failure. Construction sites then go through a [`CallSite`]
//! (usually via [`success!`](crate::success) / [`failure!`](crate::failure)),
//! which captures the enclosing function and the source line and hands the
//! new outcome to the [`Dispatcher`].
//!
//! # Key Components
//!
//! - [`DiagnosticPolicy`] / [`FunctionKey`] - What a function declares, and under which identity
//! - [`PolicyRegistry`] - Startup-time declarations, installable process-wide
//! - [`CallFrame`] / [`CallSite`] - The captured caller and the construction point
//! - [`Dispatcher`] - Resolves the caller's policy, prints, runs recovery
//! - [`DiagnosticLine`] - The fixed `[<line>] <function>() -> <tagged>` format
//!
//! Diagnostics are best-effort. A construction whose caller has no
//! declaration, or whose recovery function cannot be found or panics, returns
//! its outcome exactly as if no diagnostics existed.
//!
//! # Examples
//!
//! ```
//! use result_rail::diagnostics::{DiagnosticPolicy, FunctionKey, PolicyRegistry};
//! use result_rail::{failure, success, Outcome};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! static RESETS: AtomicUsize = AtomicUsize::new(0);
//!
//! fn divide(a: i32, b: i32) -> Outcome<i32, &'static str> {
//!     if b == 0 {
//!         return failure!("Division by zero", arity = 2);
//!     }
//!     success!(a / b, arity = 2)
//! }
//!
//! fn main() {
//!     PolicyRegistry::new()
//!         .declare(
//!             FunctionKey::new(module_path!(), "divide", 2),
//!             DiagnosticPolicy::new().log_failures(true).recover_with("reset"),
//!         )
//!         .recovery(module_path!(), "reset", || {
//!             RESETS.fetch_add(1, Ordering::SeqCst);
//!         })
//!         .install()
//!         .unwrap();
//!
//!     assert_eq!(divide(10, 2), Outcome::success(5));
//!     assert_eq!(RESETS.load(Ordering::SeqCst), 0);
//!
//!     // prints "[<line>] divide() -> Failure(Division by zero)"
//!     assert_eq!(divide(10, 0), Outcome::failure("Division by zero"));
//!     assert_eq!(RESETS.load(Ordering::SeqCst), 1);
//! }
//! ```
mod call_site;
mod dispatch;
mod frame;
mod policy;
mod printer;
mod registry;

pub use call_site::CallSite;
pub use dispatch::Dispatcher;
pub use frame::CallFrame;
pub use policy::{DiagnosticPolicy, FunctionKey};
pub use printer::DiagnosticLine;
pub use registry::{PolicyRegistry, Recovery, RegistryError};
