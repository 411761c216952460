use reqwest::Method;
use shared::{domain::Operation, protocol::CalculationRequest};

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Everything needed to issue one calculation call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub url: String,
    pub method: Method,
    pub content_type: &'static str,
    pub body: CalculationRequest,
}

pub fn build_request(
    base_url: &str,
    operation: Operation,
    probability_a: f64,
    probability_b: f64,
) -> RequestDescriptor {
    RequestDescriptor {
        url: format!("{base_url}/{}", operation.path_segment()),
        method: Method::POST,
        content_type: JSON_CONTENT_TYPE,
        body: CalculationRequest {
            probability_a,
            probability_b,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://localhost:7001/api/probabilities";

    #[test]
    fn combined_with_targets_lowercase_segment() {
        let request = build_request(BASE, Operation::CombinedWith, 0.5, 0.5);
        assert_eq!(request.url, format!("{BASE}/combinedwith"));
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.content_type, "application/json");
        assert_eq!(
            serde_json::to_value(request.body).expect("body"),
            serde_json::json!({ "probabilityA": 0.5, "probabilityB": 0.5 })
        );
    }

    #[test]
    fn either_keeps_numeric_fields_untouched() {
        let request = build_request(BASE, Operation::Either, 0.125, 1.0);
        assert!(request.url.ends_with("/either"));
        assert_eq!(request.body.probability_a, 0.125);
        assert_eq!(request.body.probability_b, 1.0);
    }
}
