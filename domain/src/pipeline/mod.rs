//! Batch validation bookkeeping: stages, rejection records and the fold
//! that splits outcomes into survivors and diagnostics.

pub mod outcome;
pub mod rejection;
pub mod stage;
