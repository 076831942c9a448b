//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ShapeError`]: structural validation failures
//! - [`string::preview`]: UTF-8 safe previews for diagnostics

pub mod error;
pub mod string;
