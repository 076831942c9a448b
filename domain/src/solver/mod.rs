//! Delegate results and strict parsing of delegate replies.

pub mod parsing;
pub mod result;
