use serde::{Deserialize, Serialize};

/// Path segment of the card collection, relative to the API base URL.
pub const FLASHCARDS_SEGMENT: &str = "flashcards";

/// Body of `POST /flashcards`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateCardRequest {
    pub question: String,
    pub answer: String,
}

impl CreateCardRequest {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_has_only_question_and_answer() {
        let body = serde_json::to_value(CreateCardRequest::new("Q", "A")).expect("json");
        assert_eq!(body, serde_json::json!({"question": "Q", "answer": "A"}));
    }
}
