//! Per-session known/unknown marks.

use std::{collections::HashMap, fmt};

use shared::domain::{Card, CardId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressCounts {
    pub known: usize,
    pub unknown: usize,
}

impl fmt::Display for ProgressCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Known: {} | Unknown: {}", self.known, self.unknown)
    }
}

/// Marks keyed by card id. Entries outlive the deck they were made against:
/// ids of deleted cards stay and still count.
#[derive(Debug, Clone, Default)]
pub struct ProgressLedger {
    entries: HashMap<CardId, bool>,
}

impl ProgressLedger {
    pub fn mark(&mut self, id: CardId, known: bool) {
        self.entries.insert(id, known);
    }

    pub fn status(&self, id: &CardId) -> Option<bool> {
        self.entries.get(id).copied()
    }

    pub fn counts(&self) -> ProgressCounts {
        let known = self.entries.values().filter(|known| **known).count();
        ProgressCounts {
            known,
            unknown: self.entries.len() - known,
        }
    }

    /// Cards from `cards` explicitly marked unknown, in deck order.
    pub fn unknown_cards(&self, cards: &[Card]) -> Vec<Card> {
        cards
            .iter()
            .filter(|card| self.status(&card.id) == Some(false))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
