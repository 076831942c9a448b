//! Choice index value object

use crate::core::error::ShapeError;
use serde::{Deserialize, Serialize};

/// Number of answer choices every question must carry.
pub const CHOICE_COUNT: usize = 4;

/// Position of an answer choice (Value Object)
///
/// Always in `0..CHOICE_COUNT`, so it can index any structurally valid
/// choice list without bounds checks at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct ChoiceIndex(u8);

impl ChoiceIndex {
    /// Create an index, returning `None` when out of range
    pub fn new(index: usize) -> Option<Self> {
        if index < CHOICE_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Validate a loosely-typed JSON value as a choice index.
    ///
    /// Accepts integers and integral floats (`2.0`); rejects strings,
    /// fractional numbers and anything outside `0..=3`.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ShapeError> {
        let raw = match value {
            serde_json::Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
            _ => None,
        };
        match raw {
            Some(i) => Self::try_from(i),
            None => Err(ShapeError::NonIntegerIndex(value.to_string())),
        }
    }

    /// Zero-based position
    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// Letter label (`A`..`D`)
    pub fn letter(self) -> char {
        (b'A' + self.0) as char
    }
}

impl TryFrom<i64> for ChoiceIndex {
    type Error = ShapeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(ShapeError::IndexOutOfRange(value))
    }
}

impl From<ChoiceIndex> for u8 {
    fn from(index: ChoiceIndex) -> Self {
        index.0
    }
}

impl std::fmt::Display for ChoiceIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
