//! Process-wide declarations of diagnostic policies and recovery functions.
use core::fmt;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use smallvec::SmallVec;

use crate::diagnostics::dispatch::DispatchError;
use crate::diagnostics::frame::CallFrame;
use crate::diagnostics::policy::{DiagnosticPolicy, FunctionKey};
use crate::types::alloc_type::Cow;

/// A zero-argument recovery function.
pub type Recovery = Arc<dyn Fn() + Send + Sync>;

/// Declarations of one scope. Most scopes declare only a handful of
/// functions, so they are stored inline.
type Declarations = SmallVec<[Declaration; 4]>;

static INSTALLED: OnceLock<PolicyRegistry> = OnceLock::new();

/// Errors raised while setting up the process-wide registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("a policy registry is already installed for this process")]
    AlreadyInstalled,
}

struct Declaration {
    name: Cow<'static, str>,
    arity: usize,
    policy: Option<DiagnosticPolicy>,
    recovery: Option<Recovery>,
}

impl Declaration {
    fn new(name: Cow<'static, str>, arity: usize) -> Self {
        Self { name, arity, policy: None, recovery: None }
    }

    fn matches(&self, name: &str, arity: Option<usize>) -> bool {
        self.name == name && arity.map_or(true, |arity| arity == self.arity)
    }
}

impl fmt::Debug for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Declaration")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("policy", &self.policy)
            .field("recovery", &self.recovery.is_some())
            .finish()
    }
}

/// Registry of per-function [`DiagnosticPolicy`] declarations and named
/// recovery functions, keyed by scope.
///
/// Build it once at startup, then either install it as the process-wide
/// registry used by [`call_site!`](crate::call_site) and friends, or pass it
/// to a [`Dispatcher`](crate::diagnostics::Dispatcher) explicitly. It is never
/// mutated after that, so concurrent readers need no locking.
///
/// # Examples
///
/// ```
/// use result_rail::diagnostics::{DiagnosticPolicy, FunctionKey, PolicyRegistry};
///
/// let registry = PolicyRegistry::new()
///     .declare(
///         FunctionKey::new("app::users", "find_by_id", 1),
///         DiagnosticPolicy::new().log_failures(true).recover_with("reconnect"),
///     )
///     .recovery("app::users", "reconnect", || {});
///
/// assert_eq!(registry.len(), 2);
/// assert!(registry.policy(&FunctionKey::new("app::users", "find_by_id", 1)).is_some());
/// assert!(registry.policy(&FunctionKey::new("app::users", "find_by_id", 2)).is_none());
/// ```
#[derive(Debug, Default)]
pub struct PolicyRegistry {
    scopes: HashMap<Cow<'static, str>, Declarations>,
}

impl PolicyRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the diagnostic policy of a function.
    ///
    /// Declaring the same key twice replaces the earlier policy.
    pub fn declare(mut self, key: FunctionKey, policy: DiagnosticPolicy) -> Self {
        self.declaration_mut(key.scope, key.name, key.arity).policy = Some(policy);
        self
    }

    /// Declares a zero-argument recovery function that policies of the same
    /// scope can name in [`DiagnosticPolicy::on_failure`].
    pub fn recovery<F>(
        mut self,
        scope: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
        callback: F,
    ) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.declaration_mut(scope.into(), name.into(), 0).recovery = Some(Arc::new(callback));
        self
    }

    /// Number of declared functions across all scopes.
    pub fn len(&self) -> usize {
        self.scopes.values().map(SmallVec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the policy declared for exactly `key`.
    pub fn policy(&self, key: &FunctionKey) -> Option<&DiagnosticPolicy> {
        self.scopes
            .get(&*key.scope)?
            .iter()
            .find(|decl| decl.matches(&key.name, Some(key.arity)))?
            .policy
            .as_ref()
    }

    /// Installs this registry as the process-wide one.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyInstalled`] if a registry was installed
    /// before; the earlier one stays in effect.
    pub fn install(self) -> Result<(), RegistryError> {
        #[cfg(feature = "tracing")]
        let declared = self.len();

        INSTALLED.set(self).map_err(|_| RegistryError::AlreadyInstalled)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(declared, "policy registry installed");
        Ok(())
    }

    /// The process-wide registry, if one has been installed.
    #[inline]
    pub fn installed() -> Option<&'static Self> {
        INSTALLED.get()
    }

    /// Resolves the policy of the function described by `frame`.
    ///
    /// The scope's declarations are scanned in declaration order and the first
    /// one matching name and arity that carries a policy wins. A frame without
    /// an arity matches any arity, so same-named overloads resolve
    /// best-effort.
    pub(crate) fn resolve(
        &self,
        frame: &CallFrame,
    ) -> Result<Option<&DiagnosticPolicy>, DispatchError> {
        let declarations = self
            .scopes
            .get(frame.scope())
            .ok_or_else(|| DispatchError::UnknownScope { scope: frame.scope().into() })?;

        Ok(declarations
            .iter()
            .filter(|decl| decl.matches(frame.function(), frame.arity()))
            .find_map(|decl| decl.policy.as_ref()))
    }

    /// Looks up the zero-argument recovery function `name` in `scope`.
    pub(crate) fn recovery_for(&self, scope: &str, name: &str) -> Result<&Recovery, DispatchError> {
        self.scopes
            .get(scope)
            .and_then(|declarations| {
                declarations
                    .iter()
                    .filter(|decl| decl.matches(name, Some(0)))
                    .find_map(|decl| decl.recovery.as_ref())
            })
            .ok_or_else(|| DispatchError::MissingRecovery {
                scope: scope.into(),
                name: name.into(),
            })
    }

    fn declaration_mut(
        &mut self,
        scope: Cow<'static, str>,
        name: Cow<'static, str>,
        arity: usize,
    ) -> &mut Declaration {
        let declarations = self.scopes.entry(scope).or_default();
        let index = match declarations
            .iter()
            .position(|decl| decl.name == name && decl.arity == arity)
        {
            Some(index) => index,
            None => {
                declarations.push(Declaration::new(name, arity));
                declarations.len() - 1
            },
        };
        &mut declarations[index]
    }
}
