//! Backend commands queued from UI to backend worker.

use shared::{domain::CardId, protocol::CreateCardRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    FetchAll,
    CreateCard { request: CreateCardRequest },
    DeleteCard { id: CardId },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::FetchAll => "fetch_all",
            BackendCommand::CreateCard { .. } => "create_card",
            BackendCommand::DeleteCard { .. } => "delete_card",
        }
    }
}
