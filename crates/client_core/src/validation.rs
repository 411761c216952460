//! Input validation for the two probability fields.
//!
//! Rules apply in order and the first failing rule wins: both fields must be
//! non-empty, then A must be a number in `[0, 1]`, then B.

use shared::{domain::ProbabilityPair, error::ValidationError};

pub fn validate(probability_a: &str, probability_b: &str) -> Result<ProbabilityPair, ValidationError> {
    if probability_a.is_empty() || probability_b.is_empty() {
        return Err(ValidationError::MissingInput);
    }
    let a = parse_probability(probability_a).ok_or(ValidationError::ProbabilityAOutOfRange)?;
    let b = parse_probability(probability_b).ok_or(ValidationError::ProbabilityBOutOfRange)?;
    Ok(ProbabilityPair::new(a, b))
}

/// Parses `text` and keeps it only when it lies in `[0, 1]`. NaN and infinities are rejected.
pub fn parse_probability(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| (0.0..=1.0).contains(value))
}

/// Field highlight rule: empty text is never flagged.
pub fn is_valid_probability(text: &str) -> bool {
    text.is_empty() || parse_probability(text).is_some()
}
