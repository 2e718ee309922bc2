//! Applies backend completions to the study controller.

use client_core::CardDeckController;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Folds one event into UI state and returns the follow-up command, if the
/// event calls for one.
pub fn reduce(
    controller: &mut CardDeckController,
    status: &mut String,
    event: UiEvent,
) -> Option<BackendCommand> {
    match event {
        UiEvent::Info(message) => {
            *status = message;
            None
        }
        UiEvent::DeckFetched(cards) => {
            *status = format!("Loaded {} cards", cards.len());
            controller.apply_fetched(cards);
            None
        }
        UiEvent::CardCreated => {
            controller.apply_created();
            Some(BackendCommand::FetchAll)
        }
        UiEvent::CardDeleted(id) => {
            tracing::debug!(card_id = %id, "card deleted; refreshing deck");
            Some(BackendCommand::FetchAll)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::{Card, CardId};

    fn card(id: i64) -> Card {
        Card {
            id: CardId::Numeric(id),
            question: format!("q{id}"),
            answer: format!("a{id}"),
        }
    }

    #[test]
    fn fetched_deck_replaces_review_subset() {
        let mut controller = CardDeckController::new();
        let mut status = String::new();
        controller.apply_fetched(vec![card(1), card(2)]);
        controller.mark_unknown(CardId::Numeric(2));
        controller.review_unknown();
        assert!(controller.is_reviewing());

        let follow_up = reduce(
            &mut controller,
            &mut status,
            UiEvent::DeckFetched(vec![card(1), card(2), card(3)]),
        );

        assert!(follow_up.is_none());
        assert_eq!(controller.deck().len(), 3);
        assert!(!controller.is_reviewing());
        assert_eq!(status, "Loaded 3 cards");
    }

    #[test]
    fn created_card_clears_form_and_refetches() {
        let mut controller = CardDeckController::new();
        let mut status = String::new();
        controller.draft_mut().question = "Q".to_string();
        controller.draft_mut().answer = "A".to_string();

        let follow_up = reduce(&mut controller, &mut status, UiEvent::CardCreated);

        assert_eq!(follow_up, Some(BackendCommand::FetchAll));
        assert!(controller.draft().question.is_empty());
        assert!(controller.draft().answer.is_empty());
    }

    #[test]
    fn deleted_card_refetches_without_touching_deck() {
        let mut controller = CardDeckController::new();
        let mut status = String::new();
        controller.apply_fetched(vec![card(1)]);

        let follow_up = reduce(
            &mut controller,
            &mut status,
            UiEvent::CardDeleted(CardId::Numeric(1)),
        );

        assert_eq!(follow_up, Some(BackendCommand::FetchAll));
        assert_eq!(controller.deck().len(), 1);
    }

    #[test]
    fn info_updates_status_line() {
        let mut controller = CardDeckController::new();
        let mut status = String::new();
        reduce(
            &mut controller,
            &mut status,
            UiEvent::Info("Backend worker ready".to_string()),
        );
        assert_eq!(status, "Backend worker ready");
    }
}
