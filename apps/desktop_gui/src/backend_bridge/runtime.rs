//! Worker thread that owns the tokio runtime and the API gateway.
//!
//! Every command runs on its own task, so completions reach the UI in
//! whatever order the server answers; the last deck to arrive wins.

use std::{sync::Arc, thread};

use client_core::{fetch_deck, remove_card, submit_card, ApiGateway};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(
    gateway: Arc<dyn ApiGateway>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::Info(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                tokio::spawn(serve_command(gateway.clone(), cmd, ui_tx.clone()));
            }
            tracing::debug!("ui command queue closed; backend worker exiting");
        });
    });
}

pub(crate) async fn serve_command(
    gateway: Arc<dyn ApiGateway>,
    cmd: BackendCommand,
    ui_tx: Sender<UiEvent>,
) {
    let event = match cmd {
        BackendCommand::FetchAll => fetch_deck(gateway.as_ref()).await.map(UiEvent::DeckFetched),
        BackendCommand::CreateCard { request } => submit_card(gateway.as_ref(), &request)
            .await
            .then_some(UiEvent::CardCreated),
        BackendCommand::DeleteCard { id } => {
            if remove_card(gateway.as_ref(), &id).await {
                Some(UiEvent::CardDeleted(id))
            } else {
                None
            }
        }
    };

    if let Some(event) = event {
        if ui_tx.try_send(event).is_err() {
            tracing::warn!("ui event queue unavailable; dropping backend completion");
        }
    }
}
