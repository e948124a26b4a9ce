//! Process-wide verification context.
//!
//! The context is built lazily, exactly once, the first time any verification
//! entry point or [`init_context`] needs it. Concurrent first callers block
//! until the single construction finishes and then all observe the same
//! instance. The outcome, including a failed construction, is kept for the life
//! of the process and never retried or torn down.
use crate::{backend::CurveBackend, ContextError, VerificationContext};
use once_cell::sync::OnceCell;
use std::panic;
use tracing::{debug, error};

/// Observable lifecycle of a [`ContextCell`].
///
/// The transient initializing state is internal to the cell: callers that
/// arrive during construction block until it reaches one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContextState {
    /// No caller has asked for the context yet.
    Uninitialized,
    /// Context was built and is shared read-only.
    Ready,
    /// Construction failed; every dependent call resolves to `false`.
    Unavailable,
}

/// Exactly-once holder of a verification context.
#[derive(Debug)]
pub struct ContextCell<C> {
    inner: OnceCell<Result<C, ContextError>>,
}

impl<C> Default for ContextCell<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ContextCell<C> {
    /// Returns an empty cell.
    pub const fn new() -> Self {
        Self {
            inner: OnceCell::new(),
        }
    }

    /// Returns the context, running `init` if nobody has yet.
    ///
    /// `init` runs at most once per cell even under concurrent first use; the
    /// other callers wait for it. Its result, success or failure, is final.
    pub fn get_or_init(
        &self,
        init: impl FnOnce() -> Result<C, ContextError>,
    ) -> Result<&C, ContextError> {
        self.inner.get_or_init(init).as_ref().map_err(Clone::clone)
    }

    /// Returns the context if construction has already completed successfully.
    pub fn get(&self) -> Option<&C> {
        self.inner.get().and_then(|res| res.as_ref().ok())
    }

    /// Returns the current lifecycle state without triggering construction.
    pub fn state(&self) -> ContextState {
        match self.inner.get() {
            None => ContextState::Uninitialized,
            Some(Ok(_)) => ContextState::Ready,
            Some(Err(_)) => ContextState::Unavailable,
        }
    }
}

/// Builds a backend context, turning a panic inside the curve library into
/// [`ContextError::Panicked`].
pub fn construct<B: CurveBackend>() -> Result<B, ContextError> {
    let res = panic::catch_unwind(B::create).unwrap_or(Err(ContextError::Panicked));
    match &res {
        Ok(_) => debug!(
            backend = core::any::type_name::<B>(),
            "verification context created"
        ),
        Err(err) => error!(%err, "failed to create verification context"),
    }
    res
}

static CONTEXT: ContextCell<VerificationContext> = ContextCell::new();

/// Returns the process-wide verification context, building it on first use.
pub fn get_context() -> Result<&'static VerificationContext, ContextError> {
    CONTEXT.get_or_init(construct::<VerificationContext>)
}

/// Forces eager construction of the process-wide context.
///
/// Safe to call any number of times. Returns `None` if the context could not
/// be built, in which case every verification call returns `false`.
pub fn init_context() -> Option<&'static VerificationContext> {
    get_context().ok()
}

/// Returns the lifecycle state of the process-wide context.
pub fn context_state() -> ContextState {
    CONTEXT.state()
}
