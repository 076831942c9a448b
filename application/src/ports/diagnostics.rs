//! Port for rejection diagnostics.
//!
//! Every candidate dropped by the batch pipeline is reported here with its
//! reason and the original candidate. This is separate from `tracing`: the
//! sink captures complete records in a machine-readable form.

use quizcheck_domain::{Rejection, Subject};

/// Port for recording dropped candidates.
///
/// `record` is synchronous and non-fallible; sink failures must not disturb
/// the request being served.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, subject: &Subject, rejection: &Rejection);
}

/// No-op implementation for tests and when diagnostics are disabled.
pub struct NoDiagnostics;

impl DiagnosticSink for NoDiagnostics {
    fn record(&self, _subject: &Subject, _rejection: &Rejection) {}
}
