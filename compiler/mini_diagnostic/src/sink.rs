//! Destinations for diagnostics as they are recorded.
//!
//! The collector keeps the authoritative list; a sink only observes. The
//! default sink forwards to `tracing`, so a binary that installs a
//! subscriber sees errors live while scanning proceeds.

use std::cell::RefCell;
use std::rc::Rc;

use crate::Diagnostic;

/// Observer notified of each recorded diagnostic.
pub trait DiagnosticSink {
    /// Called once per diagnostic, in discovery order.
    fn report(&mut self, diagnostic: &Diagnostic);

    /// Called once, the first time the error count reaches `limit`.
    fn limit_reached(&mut self, limit: usize);
}

/// Forwards diagnostics to `tracing` (`warn` for errors, `info` for the
/// threshold notice).
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: &Diagnostic) {
        tracing::warn!(
            code = %diagnostic.code,
            line = diagnostic.line,
            column = diagnostic.column,
            "{}",
            diagnostic.message
        );
    }

    fn limit_reached(&mut self, limit: usize) {
        tracing::info!(limit, "error limit reached; continuing to collect errors");
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: &Diagnostic) {}

    fn limit_reached(&mut self, _limit: usize) {}
}

#[derive(Debug, Default)]
struct Collected {
    reported: Vec<Diagnostic>,
    notices: Vec<usize>,
}

/// Keeps a copy of everything it observes.
///
/// Clones share storage: hand one clone to the lexer and keep another to
/// inspect what was reported.
#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    inner: Rc<RefCell<Collected>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics reported so far.
    pub fn reported(&self) -> Vec<Diagnostic> {
        self.inner.borrow().reported.clone()
    }

    /// Limits for which a threshold notice was received.
    pub fn notices(&self) -> Vec<usize> {
        self.inner.borrow().notices.clone()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.inner.borrow_mut().reported.push(diagnostic.clone());
    }

    fn limit_reached(&mut self, limit: usize) {
        self.inner.borrow_mut().notices.push(limit);
    }
}
