use std::fmt;

use serde::{Deserialize, Serialize};

/// Probability combination mode, resolved server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Operation {
    /// Both events: `P(A) * P(B)`.
    #[default]
    CombinedWith,
    /// Either event: `P(A) + P(B) - P(A)P(B)`.
    Either,
}

impl Operation {
    pub const ALL: [Operation; 2] = [Operation::CombinedWith, Operation::Either];

    pub fn label(self) -> &'static str {
        match self {
            Operation::CombinedWith => "CombinedWith",
            Operation::Either => "Either",
        }
    }

    /// Path segment appended to the service base URL.
    pub fn path_segment(self) -> &'static str {
        match self {
            Operation::CombinedWith => "combinedwith",
            Operation::Either => "either",
        }
    }

    pub fn symbolic_formula(self) -> &'static str {
        match self {
            Operation::CombinedWith => "P(A) * P(B)",
            Operation::Either => "P(A) + P(B) - P(A)P(B)",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Probability pair that already passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityPair {
    pub a: f64,
    pub b: f64,
}

impl ProbabilityPair {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segment_is_lowercased_label() {
        for operation in Operation::ALL {
            assert_eq!(
                operation.path_segment(),
                operation.label().to_ascii_lowercase()
            );
        }
    }

    #[test]
    fn defaults_to_combined_with() {
        assert_eq!(Operation::default(), Operation::CombinedWith);
    }
}
