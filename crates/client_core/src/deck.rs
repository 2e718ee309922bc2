//! Displayed deck, navigation cursor and flip state.

use shared::domain::{Card, CardFace};

/// The cards currently on screen plus the cursor into them.
///
/// `cursor` is a valid index whenever `cards` is non-empty; every transition
/// re-establishes that before returning.
#[derive(Debug, Clone, Default)]
pub struct DeckState {
    cards: Vec<Card>,
    cursor: usize,
    flipped: bool,
}

impl DeckState {
    pub fn new(cards: Vec<Card>) -> Self {
        let mut deck = Self::default();
        deck.replace(cards);
        deck
    }

    /// Swaps in a freshly fetched deck. The cursor stays put when it still
    /// points at a card and wraps otherwise; the flip flag is left alone.
    pub fn replace(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.cursor = if self.cards.is_empty() {
            0
        } else {
            self.cursor % self.cards.len()
        };
    }

    /// Shows a subset of the deck from its first card.
    pub fn replace_from_start(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.cursor = 0;
    }

    pub fn next(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.cards.len();
        self.flipped = false;
    }

    pub fn prev(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        let len = self.cards.len();
        self.cursor = (self.cursor + len - 1) % len;
        self.flipped = false;
    }

    pub fn toggle_flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.cursor)
    }

    pub fn visible_face(&self) -> CardFace {
        if self.flipped {
            CardFace::Answer
        } else {
            CardFace::Question
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::CardId;

    fn card(id: i64, question: &str, answer: &str) -> Card {
        Card {
            id: CardId::Numeric(id),
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    fn deck_of(len: i64) -> DeckState {
        DeckState::new((1..=len).map(|id| card(id, "q", "a")).collect())
    }

    #[test]
    fn next_wraps_to_first_card() {
        let mut deck = DeckState::new(vec![card(1, "A", "1"), card(2, "B", "2")]);
        assert_eq!(deck.cursor(), 0);
        deck.next();
        assert_eq!(deck.cursor(), 1);
        deck.next();
        assert_eq!(deck.cursor(), 0);
    }

    #[test]
    fn stepping_len_times_returns_to_start() {
        for len in 1..=7 {
            for start in 0..len {
                let mut deck = deck_of(len as i64);
                for _ in 0..start {
                    deck.next();
                }
                assert_eq!(deck.cursor(), start);
                for _ in 0..len {
                    deck.next();
                }
                assert_eq!(deck.cursor(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn prev_and_next_cancel_out() {
        for len in 1..=5 {
            for start in 0..len {
                let mut deck = deck_of(len as i64);
                for _ in 0..start {
                    deck.next();
                }
                deck.prev();
                deck.next();
                assert_eq!(deck.cursor(), start);
                deck.next();
                deck.prev();
                assert_eq!(deck.cursor(), start);
            }
        }
    }

    #[test]
    fn prev_from_first_card_goes_to_last() {
        let mut deck = deck_of(3);
        deck.prev();
        assert_eq!(deck.cursor(), 2);
        assert_eq!(deck.current().map(|c| &c.id), Some(&CardId::Numeric(3)));
    }

    #[test]
    fn navigation_on_empty_deck_is_a_no_op() {
        let mut deck = DeckState::default();
        deck.next();
        deck.prev();
        assert_eq!(deck.cursor(), 0);
        assert!(deck.current().is_none());
    }

    #[test]
    fn navigation_turns_card_face_up() {
        let mut deck = deck_of(2);
        deck.toggle_flip();
        assert_eq!(deck.visible_face(), CardFace::Answer);
        deck.next();
        assert!(!deck.is_flipped());
        deck.toggle_flip();
        deck.prev();
        assert_eq!(deck.visible_face(), CardFace::Question);
    }

    #[test]
    fn replace_keeps_valid_cursor_and_flip() {
        let mut deck = deck_of(3);
        deck.next();
        deck.toggle_flip();
        deck.replace((10..13).map(|id| card(id, "q", "a")).collect());
        assert_eq!(deck.cursor(), 1);
        assert!(deck.is_flipped());
    }

    #[test]
    fn replace_wraps_cursor_past_the_end() {
        let mut deck = deck_of(3);
        deck.prev();
        assert_eq!(deck.cursor(), 2);
        deck.replace(vec![card(1, "A", "1"), card(2, "B", "2")]);
        assert_eq!(deck.cursor(), 0);

        deck.replace(Vec::new());
        assert_eq!(deck.cursor(), 0);
        assert!(deck.is_empty());
    }
}
