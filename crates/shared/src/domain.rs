use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned card identity.
///
/// The API hands ids back either as JSON numbers or as strings depending on
/// the backing store, so every shape is kept verbatim and echoed back in
/// request paths. Numbers outside `i64` (large unsigned ids, floats) land in
/// `Number` rather than failing the whole listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardId {
    Numeric(i64),
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardId::Numeric(id) => write!(f, "{id}"),
            CardId::Number(id) => write!(f, "{id}"),
            CardId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for CardId {
    fn from(value: i64) -> Self {
        CardId::Numeric(value)
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        CardId::Text(value.to_string())
    }
}

impl CardId {
    /// Takes an id typed by the user. The text is kept as-is (minus
    /// surrounding whitespace) so "007" still addresses card "007".
    pub fn parse(raw: &str) -> Self {
        CardId::Text(raw.trim().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFace {
    #[default]
    Question,
    Answer,
}

impl Card {
    pub fn face(&self, face: CardFace) -> &str {
        match face {
            CardFace::Question => &self.question,
            CardFace::Answer => &self.answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numeric_and_string_ids() {
        let cards: Vec<Card> = serde_json::from_str(
            r#"[{"id":1,"question":"A","answer":"1"},{"id":"65f0c2","question":"B","answer":"2"}]"#,
        )
        .expect("cards");

        assert_eq!(cards[0].id, CardId::Numeric(1));
        assert_eq!(cards[1].id, CardId::Text("65f0c2".to_string()));
        assert_eq!(cards[1].id.to_string(), "65f0c2");
    }

    #[test]
    fn ignores_extra_server_fields() {
        let card: Card = serde_json::from_str(
            r#"{"id":7,"question":"Q","answer":"A","created_at":"2024-01-01"}"#,
        )
        .expect("card");
        assert_eq!(card.face(CardFace::Answer), "A");
    }

    #[test]
    fn parses_cli_ids() {
        assert_eq!(CardId::parse(" 42 ").to_string(), "42");
        assert_eq!(CardId::parse("007").to_string(), "007");
        assert_eq!(CardId::parse("+7").to_string(), "+7");
        assert_eq!(CardId::parse("-0").to_string(), "-0");
        assert_eq!(CardId::parse("abc"), CardId::Text("abc".to_string()));
    }

    #[test]
    fn keeps_numbers_outside_i64_in_listing() {
        let cards: Vec<Card> = serde_json::from_str(
            r#"[{"id":1,"question":"A","answer":"1"},
                {"id":18446744073709551615,"question":"B","answer":"2"},
                {"id":1.5,"question":"C","answer":"3"}]"#,
        )
        .expect("cards");

        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].id, CardId::Numeric(1));
        assert!(matches!(cards[1].id, CardId::Number(_)));
        assert_eq!(cards[1].id.to_string(), "18446744073709551615");
        assert!(matches!(cards[2].id, CardId::Number(_)));
        assert_eq!(cards[2].id.to_string(), "1.5");
    }
}
