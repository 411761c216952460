//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext};

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), UiError> {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err(UiError::from_message(
            UiErrorContext::Dispatch,
            "UI command queue is full; please retry",
        )),
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(command = cmd_name, "backend command processor disconnected");
            Err(UiError::from_message(
                UiErrorContext::BackendGone,
                "Backend command processor disconnected (possible startup/runtime failure)",
            ))
        }
    }
}
