//! Logging infrastructure: machine-readable rejection diagnostics.
//!
//! Provides [`JsonlDiagnosticSink`], a JSONL file writer that implements
//! the [`DiagnosticSink`](quizcheck_application::DiagnosticSink) port.

mod jsonl_diagnostics;

pub use jsonl_diagnostics::JsonlDiagnosticSink;
