//! Caller frames captured at the construction point.
use crate::types::alloc_type::{Cow, String};

/// Marker segment appended by closures (and async bodies) to a function path.
const CLOSURE_SEGMENT: &str = "::{{closure}}";

/// Describes the function that constructed an [`Outcome`](crate::Outcome).
///
/// Frames are built by [`call_site!`](crate::call_site), which records the
/// enclosing function's path and the line of the macro invocation. Nothing is
/// read from the live call stack.
///
/// `arity` is `None` when the call site did not state it; such a frame
/// resolves against a declaration of any arity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallFrame {
    scope: Cow<'static, str>,
    function: &'static str,
    line: u32,
    arity: Option<usize>,
}

impl CallFrame {
    #[inline]
    pub const fn new(
        scope: &'static str,
        function: &'static str,
        line: u32,
        arity: Option<usize>,
    ) -> Self {
        Self { scope: Cow::Borrowed(scope), function, line, arity }
    }

    /// Builds a frame from a full function path such as
    /// `my_app::math::divide`.
    ///
    /// Trailing closure segments are dropped so that an outcome built inside
    /// a closure is attributed to the function that owns the closure. Method
    /// scopes are reduced to the plain type path: generic arguments are
    /// removed (`app::Repo<_>` becomes `app::Repo`) and trait-qualified
    /// paths keep only the implementing type (`<app::User as app::Finder>`
    /// becomes `app::User`).
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::diagnostics::CallFrame;
    ///
    /// let frame = CallFrame::from_path("app::math::divide::{{closure}}", 12, Some(2));
    /// assert_eq!(frame.scope(), "app::math");
    /// assert_eq!(frame.function(), "divide");
    /// assert_eq!(frame.line(), 12);
    ///
    /// let method = CallFrame::from_path("<app::User as app::Finder>::find", 30, None);
    /// assert_eq!(method.scope(), "app::User");
    /// assert_eq!(method.function(), "find");
    /// ```
    pub fn from_path(path: &'static str, line: u32, arity: Option<usize>) -> Self {
        let mut path = path;
        while let Some(outer) = path.strip_suffix(CLOSURE_SEGMENT) {
            path = outer;
        }
        let (scope, function) = split_last_segment(path).unwrap_or(("", path));
        let function = function.split('<').next().unwrap_or(function);
        Self { scope: normalize_scope(scope), function, line, arity }
    }

    #[inline]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    #[inline]
    pub const fn function(&self) -> &'static str {
        self.function
    }

    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub const fn arity(&self) -> Option<usize> {
        self.arity
    }
}

/// Splits at the last `::` outside angle brackets.
fn split_last_segment(path: &str) -> Option<(&str, &str)> {
    let bytes = path.as_bytes();
    let mut depth = 0usize;
    let mut split = None;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                split = Some(i);
                i += 1;
            },
            _ => {},
        }
        i += 1;
    }
    split.map(|at| (&path[..at], &path[at + 2..]))
}

fn normalize_scope(scope: &'static str) -> Cow<'static, str> {
    if !scope.contains('<') {
        return Cow::Borrowed(scope);
    }

    let mut normalized = String::with_capacity(scope.len());
    match unqualify(scope) {
        Some((self_type, rest)) => {
            push_without_generics(&mut normalized, self_type);
            push_without_generics(&mut normalized, rest);
        },
        None => push_without_generics(&mut normalized, scope),
    }
    Cow::Owned(normalized)
}

/// `<Type as Trait>::rest` into `(Type, ::rest)`.
fn unqualify(scope: &str) -> Option<(&str, &str)> {
    let body = scope.strip_prefix('<')?;
    let mut depth = 0usize;
    let mut self_end = None;
    for (i, c) in body.char_indices() {
        match c {
            '<' => depth += 1,
            '>' if depth == 0 => {
                let self_type = &body[..self_end.unwrap_or(i)];
                return Some((self_type, &body[i + 1..]));
            },
            '>' => depth -= 1,
            ' ' if depth == 0 && self_end.is_none() && body[i..].starts_with(" as ") => {
                self_end = Some(i);
            },
            _ => {},
        }
    }
    None
}

fn push_without_generics(out: &mut String, path: &str) {
    let mut depth = 0usize;
    for c in path.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {},
        }
    }
}
