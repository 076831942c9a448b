//! Domain layer for quizcheck
//!
//! This crate contains the core answer-resolution logic, entities, and value
//! objects. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Canonical numbers
//!
//! Answer choices are free-form text (`"3/8 cup"`, `"-2 1/4"`, `"0.375"`).
//! [`normalize_choice`] reduces each to a finite number or an explicit error,
//! and [`match_answer`] finds the first choice within [`ANSWER_TOLERANCE`] of a
//! computed answer.
//!
//! ## Subjects
//!
//! - **Numeric** (`math`): the delegate solves blind, without the choices, and
//!   its number is matched against them
//! - **Choice-aware** (everything else): an index is selected directly

pub mod choice;
pub mod core;
pub mod pipeline;
pub mod prompt;
pub mod question;
pub mod solver;

// Re-export commonly used types
pub use choice::{
    index::{CHOICE_COUNT, ChoiceIndex},
    matcher::{ANSWER_TOLERANCE, MatchError, match_answer, matching_indices},
    normalizer::{ChoiceParseError, normalize_choice},
};
pub use core::{error::ShapeError, string::preview};
pub use pipeline::{
    outcome::{BatchOutcome, CandidateOutcome},
    rejection::{Rejection, RejectionReason},
    stage::CandidateStage,
};
pub use prompt::TaskTemplate;
pub use question::{
    batch_size::{BatchSize, MAX_BATCH, MIN_BATCH},
    candidate::{QuestionCandidate, check_choice_count},
    subject::{Subject, SubjectDomain},
    validated::ValidatedQuestion,
};
pub use solver::{
    parsing::{
        ResponseParseError, parse_choice_selection, parse_generated_batch, parse_numeric_solution,
    },
    result::{ChoiceSelection, GeneratedBatch, NumericSolution},
};
