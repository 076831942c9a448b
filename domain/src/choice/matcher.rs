//! Numeric matching of a computed answer against raw choice strings.
//!
//! The delegate's answer and the choice text can encode the same quantity in
//! different forms (`0.375` vs `3/8`), so matching compares canonical numbers
//! within [`ANSWER_TOLERANCE`] rather than strings.

use super::index::ChoiceIndex;
use super::normalizer::normalize_choice;
use thiserror::Error;

/// Maximum absolute difference for two numbers to be considered equal.
pub const ANSWER_TOLERANCE: f64 = 1e-6;

/// No choice corresponds to the computed answer.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("No choice matches computed answer {final_answer} (unparseable choices: {unparseable})")]
pub struct MatchError {
    pub final_answer: f64,
    /// How many choices had no canonical number
    pub unparseable: usize,
}

/// Return the index of the **first** choice within tolerance of `final_answer`.
///
/// Choices that fail to normalize are skipped. Two numerically equal choices
/// are not disambiguated; use [`matching_indices`] to detect that case.
pub fn match_answer<S: AsRef<str>>(
    final_answer: f64,
    choices: &[S],
) -> Result<ChoiceIndex, MatchError> {
    matching_indices(final_answer, choices)
        .first()
        .copied()
        .ok_or_else(|| MatchError {
            final_answer,
            unparseable: choices
                .iter()
                .filter(|c| normalize_choice(c.as_ref()).is_err())
                .count(),
        })
}

/// Every choice index within tolerance of `final_answer`, in choice order.
pub fn matching_indices<S: AsRef<str>>(final_answer: f64, choices: &[S]) -> Vec<ChoiceIndex> {
    if !final_answer.is_finite() {
        return Vec::new();
    }
    choices
        .iter()
        .enumerate()
        .filter_map(|(i, choice)| {
            let value = normalize_choice(choice.as_ref()).ok()?;
            ((value - final_answer).abs() < ANSWER_TOLERANCE)
                .then(|| ChoiceIndex::new(i))
                .flatten()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_choice_matches_decimal_answer() {
        let index = match_answer(0.375, &["1/4", "3/8", "1/2", "5/8"]).unwrap();
        assert_eq!(index.get(), 1);
    }

    #[test]
    fn test_mixed_and_unit_forms() {
        assert_eq!(
            match_answer(-2.25, &["-2", "-2 1/4", "2 1/4", "-9/4"])
                .unwrap()
                .get(),
            1
        );
        assert_eq!(
            match_answer(5.0, &["3 cm", "4 cm", "5 cm", "6 cm"])
                .unwrap()
                .get(),
            2
        );
    }

    #[test]
    fn test_no_match() {
        let err = match_answer(10.0, &["1", "2", "3", "4"]).unwrap_err();
        assert_eq!(err.final_answer, 10.0);
        assert_eq!(err.unparseable, 0);
    }

    #[test]
    fn test_tolerance_boundary() {
        assert!(match_answer(0.3333333, &["1/3", "2/3", "1", "0"]).is_ok());
        assert!(match_answer(0.3334, &["1/3", "2/3", "1", "0"]).is_err());
    }

    #[test]
    fn test_unparseable_choices_are_skipped() {
        let err = match_answer(7.0, &["none", "abc", "1", "2"]).unwrap_err();
        assert_eq!(err.unparseable, 2);
        assert_eq!(
            match_answer(2.0, &["none", "abc", "1", "2"]).unwrap().get(),
            3
        );
    }

    #[test]
    fn test_first_match_wins_on_numeric_tie() {
        let choices = ["0.5", "1/2", "2", "3"];
        assert_eq!(match_answer(0.5, &choices).unwrap().get(), 0);
        let all: Vec<usize> = matching_indices(0.5, &choices)
            .iter()
            .map(|i| i.get())
            .collect();
        assert_eq!(all, vec![0, 1]);
    }

    #[test]
    fn test_non_finite_answer_never_matches() {
        assert!(match_answer(f64::NAN, &["1", "2", "3", "4"]).is_err());
        assert!(match_answer(f64::INFINITY, &["1e400", "2", "3", "4"]).is_err());
    }
}
