//! Questions as they move through validation.
//!
//! A [`candidate::QuestionCandidate`] from generation is either promoted to a
//! [`validated::ValidatedQuestion`] or discarded.

pub mod batch_size;
pub mod candidate;
pub mod subject;
pub mod validated;
