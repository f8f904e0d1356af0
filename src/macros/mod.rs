//! Macros that capture the calling function for call-site diagnostics.
//!
//! - [`macro@crate::call_site`] - Creates a [`CallSite`](crate::diagnostics::CallSite) for the
//!   enclosing function and the current line.
//! - [`macro@crate::success`] / [`macro@crate::failure`] - Construct an
//!   [`Outcome`](crate::Outcome) through a fresh call site in one step.
//!
//! The enclosing function is identified from the type name of a marker item
//! declared inside it, so no stack walking is involved. When the call happens
//! inside a closure or an `async` block, the outcome is attributed to the
//! function containing it.
//!
//! # Examples
//!
//! ```
//! use result_rail::{failure, success, Outcome};
//!
//! fn find_by_id(id: u32) -> Outcome<&'static str, &'static str> {
//!     if id == 1 {
//!         success!("Alice", arity = 1)
//!     } else {
//!         failure!("User not found", arity = 1)
//!     }
//! }
//!
//! assert_eq!(find_by_id(1), Outcome::success("Alice"));
//! assert_eq!(find_by_id(2), Outcome::failure("User not found"));
//! ```

/// Full path of the enclosing function, e.g. `my_app::math::divide`.
///
/// Closure segments (`::{{closure}}`) are still present; [`CallFrame::from_path`]
/// strips them.
///
/// [`CallFrame::from_path`]: crate::diagnostics::CallFrame::from_path
#[macro_export]
#[doc(hidden)]
macro_rules! __function_path {
    () => {{
        fn __result_rail_marker() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let path = __type_name_of(__result_rail_marker);
        path.strip_suffix("::__result_rail_marker").unwrap_or(path)
    }};
}

/// Creates a [`CallSite`](crate::diagnostics::CallSite) for the enclosing
/// function at the current line.
///
/// # Syntax
///
/// - `call_site!()` - Arity unknown; resolves against a declaration of any arity
/// - `call_site!(arity = N)` - Resolves only against a declaration with `N` parameters
///
/// # Examples
///
/// ```
/// use result_rail::call_site;
///
/// fn parse_port(input: &str) -> u16 {
///     let site = call_site!(arity = 1);
///     assert_eq!(site.frame().function(), "parse_port");
///     assert_eq!(site.frame().arity(), Some(1));
///     input.parse().unwrap_or(0)
/// }
///
/// assert_eq!(parse_port("8080"), 8080);
/// ```
#[macro_export]
#[cfg(feature = "std")]
macro_rules! call_site {
    () => {
        $crate::diagnostics::CallSite::new($crate::diagnostics::CallFrame::from_path(
            $crate::__function_path!(),
            line!(),
            ::core::option::Option::None,
        ))
    };
    (arity = $arity:expr $(,)?) => {
        $crate::diagnostics::CallSite::new($crate::diagnostics::CallFrame::from_path(
            $crate::__function_path!(),
            line!(),
            ::core::option::Option::Some($arity),
        ))
    };
}

/// Constructs `Outcome::Success(value)` through a call site of the enclosing
/// function.
///
/// Both the success and the error type of the resulting outcome must
/// implement `Display` (see [`CallSite`](crate::diagnostics::CallSite)), so
/// `success!(())` does not compile; use [`Outcome::success`](crate::Outcome::success)
/// for unit or collection payloads.
///
/// # Examples
///
/// ```
/// use result_rail::{success, Outcome};
///
/// fn answer() -> Outcome<i32, String> {
///     success!(42)
/// }
///
/// assert_eq!(answer(), Outcome::success(42));
/// ```
#[macro_export]
#[cfg(feature = "std")]
macro_rules! success {
    ($value:expr, arity = $arity:expr $(,)?) => {
        $crate::call_site!(arity = $arity).success($value)
    };
    ($value:expr $(,)?) => {
        $crate::call_site!().success($value)
    };
}

/// Constructs `Outcome::Failure(error)` through a call site of the enclosing
/// function.
///
/// Same `Display` requirement as [`success!`](crate::success).
///
/// # Examples
///
/// ```
/// use result_rail::{failure, Outcome};
///
/// fn divide(a: i32, b: i32) -> Outcome<i32, &'static str> {
///     if b == 0 {
///         return failure!("Division by zero", arity = 2);
///     }
///     Outcome::success(a / b)
/// }
///
/// assert_eq!(divide(1, 0), Outcome::failure("Division by zero"));
/// ```
#[macro_export]
#[cfg(feature = "std")]
macro_rules! failure {
    ($error:expr, arity = $arity:expr $(,)?) => {
        $crate::call_site!(arity = $arity).failure($error)
    };
    ($error:expr $(,)?) => {
        $crate::call_site!().failure($error)
    };
}
