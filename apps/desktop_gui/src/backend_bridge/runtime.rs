//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{CalculationTransport, ClientSettings, HttpTransport};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, settings: ClientSettings) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let transport = match HttpTransport::new(settings.request_timeout()) {
            Ok(transport) => transport,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build HTTP client: {err}"),
                )));
                tracing::error!("failed to build HTTP client: {err}");
                return;
            }
        };

        let _ = ui_tx.try_send(UiEvent::Info(format!(
            "Backend worker ready ({})",
            settings.api_base_url
        )));
        run_command_loop(&runtime, &transport, &cmd_rx, &ui_tx);
        tracing::debug!("backend worker stopped");
    });
}

/// Serves commands until either channel closes.
pub fn run_command_loop<T: CalculationTransport>(
    runtime: &tokio::runtime::Runtime,
    transport: &T,
    cmd_rx: &Receiver<BackendCommand>,
    ui_tx: &Sender<UiEvent>,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::Calculate { ticket, request } => {
                let outcome = runtime.block_on(transport.send(&request));
                tracing::debug!(ticket = ticket.0, "calculation response received");
                if ui_tx
                    .send(UiEvent::CalculationFinished { ticket, outcome })
                    .is_err()
                {
                    tracing::warn!("ui event channel closed; stopping backend worker");
                    return;
                }
            }
        }
    }
}
