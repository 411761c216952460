//! Backend-to-UI events and error modeling for the calculator window.

use client_core::{HttpOutcome, Ticket};

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    Error(UiError),
    CalculationFinished {
        ticket: Ticket,
        outcome: HttpOutcome,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    BackendGone,
    Dispatch,
}

#[derive(Debug, Clone)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
        }
    }

    /// The backend worker is gone and no further calculation can complete.
    pub fn is_fatal_to_backend(&self) -> bool {
        matches!(
            self.context,
            UiErrorContext::BackendStartup | UiErrorContext::BackendGone
        )
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
