//! Per-candidate lifecycle

use serde::Serialize;

/// Lifecycle stage of one candidate (or one interactive check)
///
/// ```text
/// Pending → Solved → Normalized → Matched → Validated   (numeric)
/// Pending → Solved ─────────────────────→ Validated   (direct index)
///    └──────────┴─────────┴── Rejected
/// ```
///
/// `Validated` and `Rejected` are terminal; nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStage {
    Pending,
    Solved,
    Normalized,
    Matched,
    Validated,
    Rejected,
}

impl CandidateStage {
    pub fn as_str(self) -> &'static str {
        match self {
            CandidateStage::Pending => "pending",
            CandidateStage::Solved => "solved",
            CandidateStage::Normalized => "normalized",
            CandidateStage::Matched => "matched",
            CandidateStage::Validated => "validated",
            CandidateStage::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for CandidateStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
