//! Completions delivered from the backend worker to the UI thread.

use shared::domain::{Card, CardId};

pub enum UiEvent {
    Info(String),
    DeckFetched(Vec<Card>),
    CardCreated,
    CardDeleted(CardId),
}
