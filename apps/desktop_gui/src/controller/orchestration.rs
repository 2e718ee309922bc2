//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "backend command processor disconnected");
            *status = "Backend command processor disconnected; restart the app".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn queued_command_leaves_status_alone() {
        let (tx, rx) = bounded(1);
        let mut status = "Loaded 2 cards".to_string();

        dispatch_backend_command(&tx, BackendCommand::FetchAll, &mut status);

        assert_eq!(rx.try_recv().ok(), Some(BackendCommand::FetchAll));
        assert_eq!(status, "Loaded 2 cards");
    }

    #[test]
    fn full_queue_is_reported() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();

        dispatch_backend_command(&tx, BackendCommand::FetchAll, &mut status);
        dispatch_backend_command(&tx, BackendCommand::FetchAll, &mut status);

        assert_eq!(status, "UI command queue is full; please retry");
    }

    #[test]
    fn disconnected_worker_is_reported() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut status = String::new();

        dispatch_backend_command(&tx, BackendCommand::FetchAll, &mut status);

        assert!(status.starts_with("Backend command processor disconnected"));
    }
}
