//! Answer choices: positions, canonical numbers and numeric matching.
//!
//! - [`index::ChoiceIndex`]: a position restricted to `0..=3`
//! - [`normalizer::normalize_choice`]: free-form choice text to a finite number
//! - [`matcher::match_answer`]: first choice within tolerance of a computed answer

pub mod index;
pub mod matcher;
pub mod normalizer;
