//! Diagnostic system for the Mini lexer.
//!
//! - Error codes for searchability
//! - Position-tagged messages (line and tab-expanded column)
//! - An append-only collector with a soft error threshold
//! - Pluggable sinks that receive each diagnostic as it is recorded
//!
//! Recording a diagnostic never interrupts scanning. Whether a pile of
//! errors should fail the run is decided by the caller after scanning,
//! unless [`LimitPolicy::Halt`] is configured explicitly.

mod collector;
mod diagnostic;
mod error_code;
mod sink;

pub use collector::{DiagnosticConfig, Diagnostics, LimitPolicy};
pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use sink::{CollectingSink, DiagnosticSink, NullSink, TracingSink};
