use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Transport,
    Service,
    MalformedResponse,
}

/// Local input problems. Never reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter values for both probabilities.")]
    MissingInput,
    #[error("Probability A must be between 0 and 1.")]
    ProbabilityAOutOfRange,
    #[error("Probability B must be between 0 and 1.")]
    ProbabilityBOutOfRange,
}

/// Every way a submission can fail. `Display` is the user-facing text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Could not connect to the backend API. Check if the service is running.")]
    Transport { reason: String },
    #[error("{}", service_failure_message(.status, .message))]
    Service {
        status: u16,
        message: Option<String>,
    },
    #[error("The calculation service returned a malformed response.")]
    MalformedResponse { reason: String },
}

fn service_failure_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("Calculation failed with status: {status}"),
    }
}

impl CalculationError {
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Service { .. } => ErrorKind::Service,
            Self::MalformedResponse { .. } => ErrorKind::MalformedResponse,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}
