//! Subject value object

use serde::{Deserialize, Serialize};

/// Subject name that marks numeric questions.
pub const NUMERIC_SUBJECT: &str = "math";

/// How the ground-truth answer for a subject is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectDomain {
    /// The delegate computes a number without seeing the choices; the
    /// number is then matched against the choices.
    Numeric,
    /// The delegate (or generation) selects a choice index directly.
    ChoiceAware,
}

/// A question subject such as `math` or `reading` (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subject(String);

impl Subject {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn math() -> Self {
        Self::new(NUMERIC_SUBJECT)
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Select the solving strategy for this subject
    pub fn domain(&self) -> SubjectDomain {
        if self.0.trim().eq_ignore_ascii_case(NUMERIC_SUBJECT) {
            SubjectDomain::Numeric
        } else {
            SubjectDomain::ChoiceAware
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Subject {
    fn from(s: &str) -> Self {
        Subject::new(s)
    }
}
