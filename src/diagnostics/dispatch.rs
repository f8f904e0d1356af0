//! Resolves a caller's policy and carries it out.
use core::fmt::Display;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};

use crate::diagnostics::frame::CallFrame;
use crate::diagnostics::printer::{self, DiagnosticLine};
use crate::diagnostics::registry::{PolicyRegistry, Recovery};
use crate::outcome::Outcome;
use crate::types::alloc_type::String;
use crate::types::Variant;

/// Why a dispatch was abandoned. Never leaves the dispatcher.
#[derive(Debug, thiserror::Error)]
pub(crate) enum DispatchError {
    #[error("no functions are declared in scope `{scope}`")]
    UnknownScope { scope: String },

    #[error("recovery function `{name}` is not declared in scope `{scope}`")]
    MissingRecovery { scope: String, name: String },

    #[error("recovery function `{name}` panicked")]
    RecoveryPanicked { name: String },

    #[error("failed to write diagnostic line: {0}")]
    Write(#[from] io::Error),
}

/// Applies declared diagnostic policies to construction events.
///
/// Dispatch is best-effort: whatever goes wrong while resolving the policy,
/// printing, or running the recovery function is discarded, and the outcome
/// being constructed is never touched.
///
/// # Examples
///
/// ```
/// use result_rail::diagnostics::{CallFrame, DiagnosticPolicy, Dispatcher, FunctionKey, PolicyRegistry};
/// use result_rail::Outcome;
///
/// let registry = PolicyRegistry::new()
///     .declare(FunctionKey::new("app", "divide", 2), DiagnosticPolicy::new().log_failures(true));
/// let dispatcher = Dispatcher::new(&registry);
///
/// let frame = CallFrame::new("app", "divide", 7, Some(2));
/// let outcome = Outcome::<i32, &str>::failure("Division by zero");
///
/// // prints "[7] divide() -> Failure(Division by zero)"
/// dispatcher.dispatch(&frame, &outcome);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'r> {
    registry: &'r PolicyRegistry,
}

impl<'r> Dispatcher<'r> {
    #[inline]
    pub const fn new(registry: &'r PolicyRegistry) -> Self {
        Self { registry }
    }

    /// Dispatcher over the installed process-wide registry, if any.
    #[inline]
    pub fn installed() -> Option<Dispatcher<'static>> {
        PolicyRegistry::installed().map(Dispatcher::new)
    }

    /// Handles one construction event made by `frame`, printing to stdout.
    pub fn dispatch<T, E>(&self, frame: &CallFrame, outcome: &Outcome<T, E>)
    where
        T: Display,
        E: Display,
    {
        self.dispatch_to(&mut io::stdout(), frame, outcome);
    }

    pub(crate) fn dispatch_to<W, T, E>(&self, out: &mut W, frame: &CallFrame, outcome: &Outcome<T, E>)
    where
        W: Write,
        T: Display,
        E: Display,
    {
        if let Err(err) = self.try_dispatch(out, frame, outcome) {
            discard(frame, err);
        }
    }

    fn try_dispatch<W, T, E>(
        &self,
        out: &mut W,
        frame: &CallFrame,
        outcome: &Outcome<T, E>,
    ) -> Result<(), DispatchError>
    where
        W: Write,
        T: Display,
        E: Display,
    {
        let Some(policy) = self.registry.resolve(frame)? else {
            return Ok(());
        };

        let variant = outcome.variant();
        let logged = if policy.should_log(variant) {
            printer::emit(out, &DiagnosticLine::new(frame, outcome)).map_err(DispatchError::from)
        } else {
            Ok(())
        };

        // Recovery does not depend on the line reaching the output.
        let recovered = match policy.recovery_target() {
            Some(name) if variant == Variant::Failure => self
                .registry
                .recovery_for(frame.scope(), name)
                .and_then(|recovery| invoke(name, recovery)),
            _ => Ok(()),
        };

        logged.and(recovered)
    }
}

fn invoke(name: &str, recovery: &Recovery) -> Result<(), DispatchError> {
    #[cfg(feature = "tracing")]
    tracing::trace!(recovery = name, "running recovery function");

    panic::catch_unwind(AssertUnwindSafe(|| (**recovery)()))
        .map_err(|_| DispatchError::RecoveryPanicked { name: name.into() })
}

/// The single point where dispatch failures are dropped.
fn discard(frame: &CallFrame, err: DispatchError) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        scope = frame.scope(),
        function = frame.function(),
        line = frame.line(),
        error = %err,
        "call-site diagnostics skipped"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = (frame, err);
}
