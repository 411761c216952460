use shared::{
    domain::{Operation, ProbabilityPair},
    error::CalculationError,
};
use tracing::info;

pub mod form;
pub mod format;
pub mod request;
pub mod response;
pub mod settings;
pub mod transport;
pub mod validation;

pub use form::{CalculationSummary, CalculatorForm, InputState, Outcome, SubmitAction, Ticket};
pub use format::{format_optional_result, format_result, formula};
pub use request::{build_request, RequestDescriptor};
pub use response::{interpret, HttpOutcome};
pub use settings::{load_settings, ClientSettings, SettingsError};
pub use transport::{CalculationTransport, HttpTransport};
pub use validation::validate;

/// Drives calculations through a [`CalculationTransport`].
pub struct CalculatorClient<T: CalculationTransport> {
    base_url: String,
    transport: T,
}

impl CalculatorClient<HttpTransport> {
    pub fn from_settings(settings: &ClientSettings) -> Result<Self, reqwest::Error> {
        let transport = HttpTransport::new(settings.request_timeout())?;
        Ok(Self::new(settings.api_base_url.clone(), transport))
    }
}

impl<T: CalculationTransport> CalculatorClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// A fresh form pointed at this client's service.
    pub fn new_form(&self) -> CalculatorForm {
        CalculatorForm::new(self.base_url.clone())
    }

    /// Builds, sends and interprets one request. Inputs are not validated here.
    pub async fn calculate(
        &self,
        operation: Operation,
        inputs: ProbabilityPair,
    ) -> Result<f64, CalculationError> {
        let request = build_request(&self.base_url, operation, inputs.a, inputs.b);
        let outcome = self.transport.send(&request).await;
        interpret(&outcome)
    }

    /// Runs a full submit cycle on `form` and returns where it ended up.
    pub async fn submit<'f>(&self, form: &'f mut CalculatorForm) -> &'f Outcome {
        if let SubmitAction::Dispatch { ticket, request } = form.submit() {
            let outcome = self.transport.send(&request).await;
            form.complete(ticket, &outcome);
            info!(ticket = ticket.0, "form submission finished");
        }
        form.outcome()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
