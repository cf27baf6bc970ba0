//! Append-only diagnostic collector with a soft error threshold.
//!
//! Features:
//! - Discovery-order storage of every recorded error
//! - One informational notice the first time the count reaches the limit
//! - An explicit [`LimitPolicy`] deciding whether the limit stops scanning

use std::fmt;

use crate::{Diagnostic, DiagnosticSink, TracingSink};

/// What the lexer does once the error limit is reached.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum LimitPolicy {
    /// Emit the notice and keep scanning.
    #[default]
    Continue,
    /// Emit the notice and stop; the lexer produces EOF on its next call.
    Halt,
}

/// Configuration for diagnostic collection.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Error count that triggers the threshold notice (0 = no threshold).
    pub error_limit: usize,
    /// Behavior once the threshold is reached.
    pub on_limit: LimitPolicy,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            on_limit: LimitPolicy::Continue,
        }
    }
}

impl DiagnosticConfig {
    /// No threshold at all.
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            on_limit: LimitPolicy::Continue,
        }
    }

    /// Stop scanning after `limit` errors.
    pub fn halt_after(limit: usize) -> Self {
        DiagnosticConfig {
            error_limit: limit,
            on_limit: LimitPolicy::Halt,
        }
    }
}

/// Ordered list of recorded diagnostics.
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
    config: DiagnosticConfig,
    sink: Box<dyn DiagnosticSink>,
    limit_reached: bool,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("entries", &self.entries)
            .field("config", &self.config)
            .field("limit_reached", &self.limit_reached)
            .finish_non_exhaustive()
    }
}

impl Diagnostics {
    /// Default configuration, reporting to [`TracingSink`].
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        Self::with_sink(config, Box::new(TracingSink))
    }

    pub fn with_sink(config: DiagnosticConfig, sink: Box<dyn DiagnosticSink>) -> Self {
        Diagnostics {
            entries: Vec::new(),
            config,
            sink,
            limit_reached: false,
        }
    }

    /// Append a diagnostic and forward it to the sink.
    ///
    /// The threshold notice fires exactly once, when the count first
    /// equals the configured limit.
    pub fn record(&mut self, diagnostic: Diagnostic) {
        self.sink.report(&diagnostic);
        self.entries.push(diagnostic);

        let limit = self.config.error_limit;
        if limit > 0 && !self.limit_reached && self.entries.len() >= limit {
            self.limit_reached = true;
            self.sink.limit_reached(limit);
        }
    }

    /// `true` once the threshold notice has been emitted.
    pub fn limit_reached(&self) -> bool {
        self.limit_reached
    }

    /// `true` when the limit was reached under [`LimitPolicy::Halt`].
    pub fn should_halt(&self) -> bool {
        self.limit_reached && self.config.on_limit == LimitPolicy::Halt
    }

    /// All diagnostics in discovery order.
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Consume the collector, returning the recorded diagnostics.
    pub fn into_entries(self) -> Vec<Diagnostic> {
        self.entries
    }
}
