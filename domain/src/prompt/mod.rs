//! Prompt domain
//!
//! Task descriptions for the delegate calls.

mod template;

pub use template::TaskTemplate;
