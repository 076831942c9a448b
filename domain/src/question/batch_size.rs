//! Requested batch size

use serde_json::Value;

/// Smallest batch a request can ask for.
pub const MIN_BATCH: usize = 1;
/// Largest batch a request can ask for.
pub const MAX_BATCH: usize = 10;
/// Batch size used when the request names none.
pub const DEFAULT_BATCH: usize = 5;

/// Number of questions requested, always within `MIN_BATCH..=MAX_BATCH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSize(usize);

impl BatchSize {
    /// Clamp an integer into range.
    pub fn clamped(requested: i64) -> Self {
        Self(requested.clamp(MIN_BATCH as i64, MAX_BATCH as i64) as usize)
    }

    /// Coerce a loosely-typed request value.
    ///
    /// - absent / `null` → [`DEFAULT_BATCH`]
    /// - numbers are floored, then clamped
    /// - numeric strings are parsed the same way
    /// - anything else coerces to the lower bound
    pub fn from_request(value: Option<&Value>) -> Self {
        let number = match value {
            None | Some(Value::Null) => return Self(DEFAULT_BATCH),
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            Some(_) => None,
        };
        match number.filter(|n| !n.is_nan()) {
            // `as` saturates for out-of-range floats
            Some(n) => Self::clamped(n.floor() as i64),
            None => Self(MIN_BATCH),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for BatchSize {
    fn default() -> Self {
        Self(DEFAULT_BATCH)
    }
}
