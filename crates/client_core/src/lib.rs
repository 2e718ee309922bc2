//! Client core for the flashcards study app: configuration, the HTTP
//! gateway to the card API, and the front-end-agnostic study controller.

pub mod config;
pub mod controller;
pub mod deck;
pub mod error;
pub mod gateway;
pub mod progress;

pub use config::{load_settings, normalize_api_url, ClientSettings};
pub use controller::{
    fetch_deck, remove_card, submit_card, CardDeckController, CardDraft, ReviewOutcome,
    NOTHING_TO_REVIEW_NOTICE, NO_CARDS_NOTICE,
};
pub use deck::DeckState;
pub use error::ConfigError;
pub use gateway::{ApiGateway, HttpApiGateway};
pub use progress::{ProgressCounts, ProgressLedger};
