//! Per-function diagnostic declarations.
use crate::types::alloc_type::Cow;
use crate::types::Variant;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What the diagnostics layer does when a declared function constructs an
/// [`Outcome`](crate::Outcome) through a call site.
///
/// A policy is plain data: it can be built in code with the fluent methods
/// below or, with the `serde` feature, loaded from configuration. Missing
/// fields deserialize to their defaults (nothing logged, no recovery).
///
/// # Examples
///
/// ```
/// use result_rail::diagnostics::DiagnosticPolicy;
/// use result_rail::Variant;
///
/// let policy = DiagnosticPolicy::new().log_failures(true).recover_with("reset_cache");
///
/// assert!(policy.should_log(Variant::Failure));
/// assert!(!policy.should_log(Variant::Success));
/// assert_eq!(policy.recovery_target(), Some("reset_cache"));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DiagnosticPolicy {
    /// Print a line when the function constructs a `Success`.
    pub log_on_success: bool,
    /// Print a line when the function constructs a `Failure`.
    pub log_on_failure: bool,
    /// Name of a zero-argument recovery function, declared in the same
    /// scope, to invoke when the function constructs a `Failure`.
    pub on_failure: Option<Cow<'static, str>>,
}

impl DiagnosticPolicy {
    /// A policy that neither logs nor recovers.
    #[inline]
    pub const fn new() -> Self {
        Self { log_on_success: false, log_on_failure: false, on_failure: None }
    }

    /// A policy that logs both successes and failures.
    #[inline]
    pub const fn logged() -> Self {
        Self { log_on_success: true, log_on_failure: true, on_failure: None }
    }

    #[inline]
    pub fn log_successes(mut self, enabled: bool) -> Self {
        self.log_on_success = enabled;
        self
    }

    #[inline]
    pub fn log_failures(mut self, enabled: bool) -> Self {
        self.log_on_failure = enabled;
        self
    }

    /// Names the recovery function to run when a failure is constructed.
    #[inline]
    pub fn recover_with(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.on_failure = Some(name.into());
        self
    }

    /// Whether constructing `variant` qualifies for a diagnostic line.
    #[inline]
    pub fn should_log(&self, variant: Variant) -> bool {
        match variant {
            Variant::Success => self.log_on_success,
            Variant::Failure => self.log_on_failure,
        }
    }

    #[inline]
    pub fn recovery_target(&self) -> Option<&str> {
        self.on_failure.as_deref()
    }
}

/// Identity of a declared function: `(scope, name, arity)`.
///
/// `scope` is the path of the item that encloses the function: the module
/// path for a free function (`module_path!()` inside it), the enclosing
/// function's full path for a function nested in another function
/// (`app::outer` for `fn inner` declared inside `app::outer`), and the plain
/// type path for methods (`app::User`). Generic arguments are never part of
/// the scope, and methods of trait impls use the implementing type, so
/// `impl<T> Finder for Repo<T>` methods are declared under `app::Repo`.
///
/// # Examples
///
/// ```
/// use result_rail::diagnostics::FunctionKey;
///
/// let key = FunctionKey::new(module_path!(), "divide", 2);
/// assert_eq!(key.name, "divide");
/// assert_eq!(key.arity, 2);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionKey {
    pub scope: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub arity: usize,
}

impl FunctionKey {
    #[inline]
    pub fn new(
        scope: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
        arity: usize,
    ) -> Self {
        Self { scope: scope.into(), name: name.into(), arity }
    }
}
