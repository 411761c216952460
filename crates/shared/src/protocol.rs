use serde::{Deserialize, Serialize};

use crate::domain::ProbabilityPair;

/// JSON body posted to `{base}/{operation}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub probability_a: f64,
    pub probability_b: f64,
}

impl From<ProbabilityPair> for CalculationRequest {
    fn from(value: ProbabilityPair) -> Self {
        Self {
            probability_a: value.a,
            probability_b: value.b,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub result: f64,
}

/// Error body returned with a non-success status. The field is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
