//! Calculator form state: raw inputs, selected operation and the outcome of the
//! latest submission.
//!
//! Each dispatched request carries a [`Ticket`]. Submitting or resetting moves
//! the form to a new generation, and [`CalculatorForm::complete`] ignores any
//! completion whose ticket is no longer current.

use shared::{
    domain::{Operation, ProbabilityPair},
    error::{CalculationError, ValidationError},
};
use tracing::{debug, info, warn};

use crate::{
    format::{format_result, formula},
    request::{build_request, RequestDescriptor},
    response::{interpret, HttpOutcome},
    validation::{is_valid_probability, validate},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pub probability_a: String,
    pub probability_b: String,
    pub operation: Operation,
}

/// A successful calculation together with the inputs that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationSummary {
    pub operation: Operation,
    pub inputs: ProbabilityPair,
    pub result: f64,
}

impl CalculationSummary {
    pub fn formatted_result(&self) -> String {
        format_result(self.result)
    }

    pub fn formula(&self) -> String {
        formula(self.operation, self.inputs.a, self.inputs.b)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Outcome {
    #[default]
    Idle,
    Loading,
    Success(CalculationSummary),
    Failure(CalculationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction {
    /// Validation passed; the caller must send `request` and report back with `ticket`.
    Dispatch {
        ticket: Ticket,
        request: RequestDescriptor,
    },
    Rejected(ValidationError),
    /// A request is already in flight.
    Busy,
}

#[derive(Debug, Clone, Copy)]
struct PendingSubmission {
    ticket: Ticket,
    operation: Operation,
    inputs: ProbabilityPair,
}

#[derive(Debug, Clone)]
pub struct CalculatorForm {
    base_url: String,
    input: InputState,
    outcome: Outcome,
    generation: u64,
    pending: Option<PendingSubmission>,
}

impl CalculatorForm {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            input: InputState::default(),
            outcome: Outcome::Idle,
            generation: 0,
            pending: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn operation(&self) -> Operation {
        self.input.operation
    }

    pub fn set_probability_a(&mut self, text: impl Into<String>) {
        self.input.probability_a = text.into();
    }

    pub fn set_probability_b(&mut self, text: impl Into<String>) {
        self.input.probability_b = text.into();
    }

    pub fn select_operation(&mut self, operation: Operation) {
        self.input.operation = operation;
    }

    /// Pressed state of the toggle for `operation`.
    pub fn is_selected(&self, operation: Operation) -> bool {
        self.input.operation == operation
    }

    pub fn probability_a_invalid(&self) -> bool {
        !is_valid_probability(&self.input.probability_a)
    }

    pub fn probability_b_invalid(&self) -> bool {
        !is_valid_probability(&self.input.probability_b)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.outcome, Outcome::Loading)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    pub fn error_message(&self) -> Option<String> {
        match &self.outcome {
            Outcome::Failure(err) => Some(err.message()),
            _ => None,
        }
    }

    pub fn success(&self) -> Option<&CalculationSummary> {
        match &self.outcome {
            Outcome::Success(summary) => Some(summary),
            _ => None,
        }
    }

    pub fn submit(&mut self) -> SubmitAction {
        if self.is_loading() {
            debug!("submit ignored while a calculation is in flight");
            return SubmitAction::Busy;
        }

        self.outcome = Outcome::Idle;
        let inputs = match validate(&self.input.probability_a, &self.input.probability_b) {
            Ok(inputs) => inputs,
            Err(err) => {
                debug!(error = %err, "calculator input rejected");
                self.outcome = Outcome::Failure(err.into());
                return SubmitAction::Rejected(err);
            }
        };

        let ticket = self.advance_generation();
        let operation = self.input.operation;
        self.pending = Some(PendingSubmission {
            ticket,
            operation,
            inputs,
        });
        self.outcome = Outcome::Loading;

        let request = build_request(&self.base_url, operation, inputs.a, inputs.b);
        debug!(ticket = ticket.0, url = %request.url, "calculation dispatched");
        SubmitAction::Dispatch { ticket, request }
    }

    /// Applies a finished request. Returns `false` when `ticket` is stale.
    pub fn complete(&mut self, ticket: Ticket, outcome: &HttpOutcome) -> bool {
        let pending = match self.pending {
            Some(pending) if pending.ticket == ticket && self.is_loading() => pending,
            _ => {
                warn!(ticket = ticket.0, "discarding stale calculation result");
                return false;
            }
        };
        self.pending = None;

        self.outcome = match interpret(outcome) {
            Ok(result) => {
                info!(
                    operation = %pending.operation,
                    result,
                    "calculation succeeded"
                );
                Outcome::Success(CalculationSummary {
                    operation: pending.operation,
                    inputs: pending.inputs,
                    result,
                })
            }
            Err(err) => {
                warn!(kind = ?err.kind(), error = %err, "calculation failed");
                Outcome::Failure(err)
            }
        };
        true
    }

    pub fn reset(&mut self) {
        self.advance_generation();
        self.pending = None;
        self.input = InputState::default();
        self.outcome = Outcome::Idle;
    }

    fn advance_generation(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        Ticket(self.generation)
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
