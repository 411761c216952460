use shared::{
    error::CalculationError,
    protocol::{CalculationResponse, ServiceErrorBody},
};

/// What came back from one calculation call, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpOutcome {
    Response { status: u16, body: String },
    /// The service could not be reached at all.
    Transport(String),
}

impl HttpOutcome {
    pub fn response(status: u16, body: impl Into<String>) -> Self {
        Self::Response {
            status,
            body: body.into(),
        }
    }
}

pub fn interpret(outcome: &HttpOutcome) -> Result<f64, CalculationError> {
    match outcome {
        HttpOutcome::Transport(reason) => Err(CalculationError::transport(reason.clone())),
        HttpOutcome::Response { status, body } if (200..300).contains(status) => {
            serde_json::from_str::<CalculationResponse>(body)
                .map(|response| response.result)
                .map_err(|err| CalculationError::malformed(err.to_string()))
        }
        HttpOutcome::Response { status, body } => {
            // An unreadable error body still yields the status-coded message.
            let message = serde_json::from_str::<ServiceErrorBody>(body)
                .ok()
                .and_then(|body| body.error)
                .filter(|message| !message.is_empty());
            Err(CalculationError::Service {
                status: *status,
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorKind;

    #[test]
    fn success_body_yields_result() {
        let outcome = HttpOutcome::response(200, r#"{"result":0.25}"#);
        assert_eq!(interpret(&outcome), Ok(0.25));
    }

    #[test]
    fn transport_failure_uses_connection_message() {
        let err = interpret(&HttpOutcome::Transport("connection refused".into()))
            .expect_err("must fail");
        assert_eq!(
            err.to_string(),
            "Could not connect to the backend API. Check if the service is running."
        );
    }

    #[test]
    fn service_error_field_is_surfaced() {
        let outcome = HttpOutcome::response(400, r#"{"error":"ProbabilityA is out of range"}"#);
        let err = interpret(&outcome).expect_err("must fail");
        assert_eq!(err.to_string(), "ProbabilityA is out of range");
    }

    #[test]
    fn service_error_without_field_reports_status() {
        for body in [r#"{"title":"oops"}"#, "", "<html>bad gateway</html>", r#"{"error":""}"#] {
            let err = interpret(&HttpOutcome::response(502, body)).expect_err("must fail");
            assert_eq!(err.to_string(), "Calculation failed with status: 502", "{body:?}");
        }
    }

    #[test]
    fn malformed_success_body_is_a_failure() {
        for body in ["not json", r#"{"value":0.2}"#, r#"{"result":"0.2"}"#, ""] {
            let err = interpret(&HttpOutcome::response(200, body)).expect_err("must fail");
            assert_eq!(err.kind(), ErrorKind::MalformedResponse, "{body:?}");
        }
    }
}
