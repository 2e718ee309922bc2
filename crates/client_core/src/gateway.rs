//! HTTP access to the card collection.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{Card, CardId},
    protocol::{CreateCardRequest, FLASHCARDS_SEGMENT},
};
use url::Url;

use crate::{
    config::{normalize_api_url, parse_api_url, ClientSettings},
    error::ConfigError,
};

#[async_trait]
pub trait ApiGateway: Send + Sync {
    async fn list_cards(&self) -> Result<Vec<Card>>;
    /// The created card in the response body is not consumed.
    async fn create_card(&self, request: &CreateCardRequest) -> Result<()>;
    async fn delete_card(&self, id: &CardId) -> Result<()>;
}

pub struct HttpApiGateway {
    http: Client,
    base_url: Url,
}

impl HttpApiGateway {
    pub fn new(api_url: &str) -> Result<Self, ConfigError> {
        let normalized = normalize_api_url(api_url)?;
        Ok(Self {
            http: Client::new(),
            base_url: parse_api_url(&normalized)?,
        })
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, ConfigError> {
        Self::new(&settings.api_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn collection_url(&self, id: Option<&CardId>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| anyhow!("api url '{}' cannot carry a path", self.base_url))?;
            segments.pop_if_empty().push(FLASHCARDS_SEGMENT);
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl ApiGateway for HttpApiGateway {
    async fn list_cards(&self) -> Result<Vec<Card>> {
        let cards: Vec<Card> = self
            .http
            .get(self.collection_url(None)?)
            .send()
            .await
            .context("list cards request failed")?
            .error_for_status()?
            .json()
            .await
            .context("list cards response was not a card array")?;
        Ok(cards)
    }

    async fn create_card(&self, request: &CreateCardRequest) -> Result<()> {
        self.http
            .post(self.collection_url(None)?)
            .json(request)
            .send()
            .await
            .context("create card request failed")?
            .error_for_status()?;
        Ok(())
    }

    async fn delete_card(&self, id: &CardId) -> Result<()> {
        self.http
            .delete(self.collection_url(Some(id))?)
            .send()
            .await
            .with_context(|| format!("delete card {id} request failed"))?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/gateway_tests.rs"]
mod tests;
