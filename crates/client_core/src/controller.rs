//! Study-session state and its transitions.
//!
//! [`CardDeckController`] owns everything a front-end renders. Synchronous
//! transitions cover navigation, flipping and marking; the async helpers at
//! the bottom wrap [`ApiGateway`] calls so failures are logged and dropped
//! instead of reaching the user.

use shared::{
    domain::{Card, CardFace, CardId},
    protocol::CreateCardRequest,
};
use tracing::{debug, error};

use crate::{
    deck::DeckState,
    gateway::ApiGateway,
    progress::{ProgressCounts, ProgressLedger},
};

pub const NO_CARDS_NOTICE: &str = "No flashcards available";
pub const NOTHING_TO_REVIEW_NOTICE: &str = "No unknown cards to review!";

/// Text typed into the "add card" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    pub question: String,
    pub answer: String,
}

impl CardDraft {
    pub fn to_request(&self) -> CreateCardRequest {
        CreateCardRequest::new(self.question.clone(), self.answer.clone())
    }

    pub fn clear(&mut self) {
        self.question.clear();
        self.answer.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    Started { cards: usize },
    NothingToReview,
}

#[derive(Debug, Default)]
pub struct CardDeckController {
    deck: DeckState,
    ledger: ProgressLedger,
    draft: CardDraft,
    reviewing: bool,
    notice: Option<String>,
}

impl CardDeckController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the displayed deck with a server listing. Ends review mode;
    /// ledger and flip state are untouched.
    pub fn apply_fetched(&mut self, cards: Vec<Card>) {
        self.deck.replace(cards);
        self.reviewing = false;
    }

    /// A create round trip succeeded.
    pub fn apply_created(&mut self) {
        self.draft.clear();
    }

    pub fn next(&mut self) {
        self.deck.next();
    }

    pub fn prev(&mut self) {
        self.deck.prev();
    }

    pub fn toggle_flip(&mut self) {
        self.deck.toggle_flip();
    }

    pub fn mark_known(&mut self, id: CardId) {
        self.ledger.mark(id, true);
        self.deck.next();
    }

    pub fn mark_unknown(&mut self, id: CardId) {
        self.ledger.mark(id, false);
        self.deck.next();
    }

    /// Marks whatever card is on screen. Returns the id that was marked.
    pub fn mark_current(&mut self, known: bool) -> Option<CardId> {
        let id = self.deck.current()?.id.clone();
        if known {
            self.mark_known(id.clone());
        } else {
            self.mark_unknown(id.clone());
        }
        Some(id)
    }

    /// Narrows the displayed deck to cards marked unknown. The subset is a
    /// view only: the next fetch restores the full deck.
    pub fn review_unknown(&mut self) -> ReviewOutcome {
        let unknown = self.ledger.unknown_cards(self.deck.cards());
        if unknown.is_empty() {
            self.notice = Some(NOTHING_TO_REVIEW_NOTICE.to_string());
            return ReviewOutcome::NothingToReview;
        }
        let cards = unknown.len();
        self.deck.replace_from_start(unknown);
        self.reviewing = true;
        ReviewOutcome::Started { cards }
    }

    pub fn counts(&self) -> ProgressCounts {
        self.ledger.counts()
    }

    pub fn current(&self) -> Option<&Card> {
        self.deck.current()
    }

    pub fn current_id(&self) -> Option<CardId> {
        self.deck.current().map(|card| card.id.clone())
    }

    /// Text of the face currently showing, if there is a card at all.
    pub fn visible_text(&self) -> Option<&str> {
        let face = self.deck.visible_face();
        self.deck.current().map(|card| card.face(face))
    }

    pub fn visible_face(&self) -> CardFace {
        self.deck.visible_face()
    }

    pub fn deck(&self) -> &DeckState {
        &self.deck
    }

    pub fn ledger(&self) -> &ProgressLedger {
        &self.ledger
    }

    pub fn cursor(&self) -> usize {
        self.deck.cursor()
    }

    pub fn is_flipped(&self) -> bool {
        self.deck.is_flipped()
    }

    pub fn is_reviewing(&self) -> bool {
        self.reviewing
    }

    pub fn draft(&self) -> &CardDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut CardDraft {
        &mut self.draft
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub async fn fetch_all(&mut self, gateway: &dyn ApiGateway) {
        if let Some(cards) = fetch_deck(gateway).await {
            self.apply_fetched(cards);
        }
    }

    /// Submits the draft; on success clears it and refetches.
    pub async fn create(&mut self, gateway: &dyn ApiGateway) {
        if submit_card(gateway, &self.draft.to_request()).await {
            self.apply_created();
            self.fetch_all(gateway).await;
        }
    }

    pub async fn remove(&mut self, gateway: &dyn ApiGateway, id: &CardId) {
        if remove_card(gateway, id).await {
            self.fetch_all(gateway).await;
        }
    }
}

/// Lists cards, logging and discarding any failure.
pub async fn fetch_deck(gateway: &dyn ApiGateway) -> Option<Vec<Card>> {
    match gateway.list_cards().await {
        Ok(cards) => {
            debug!(count = cards.len(), "fetched flashcards");
            Some(cards)
        }
        Err(err) => {
            error!(op = "fetch_all", "error fetching flashcards: {err:#}");
            None
        }
    }
}

pub async fn submit_card(gateway: &dyn ApiGateway, request: &CreateCardRequest) -> bool {
    match gateway.create_card(request).await {
        Ok(()) => {
            debug!("created flashcard");
            true
        }
        Err(err) => {
            error!(op = "create", "error adding flashcard: {err:#}");
            false
        }
    }
}

pub async fn remove_card(gateway: &dyn ApiGateway, id: &CardId) -> bool {
    match gateway.delete_card(id).await {
        Ok(()) => {
            debug!(card_id = %id, "deleted flashcard");
            true
        }
        Err(err) => {
            error!(op = "remove", card_id = %id, "error deleting flashcard: {err:#}");
            false
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
