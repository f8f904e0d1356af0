//! Extension traits for interoperating with standard library types.
//!
//! - [`ResultExt`]: Turns a `Result` into an [`Outcome`](crate::Outcome), optionally
//!   dispatching it at a call site

pub mod result_ext;

pub use result_ext::ResultExt;
