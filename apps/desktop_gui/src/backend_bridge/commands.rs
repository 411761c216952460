//! Backend commands queued from UI to backend worker.

use client_core::{RequestDescriptor, Ticket};

#[derive(Debug)]
pub enum BackendCommand {
    Calculate {
        ticket: Ticket,
        request: RequestDescriptor,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Calculate { .. } => "calculate",
        }
    }
}
