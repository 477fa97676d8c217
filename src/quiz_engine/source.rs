//! Where characters and spells come from.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::quiz_engine::{
    config::HpApiConfig,
    error::FetchError,
    models::{Character, House, Spell},
};

/// Supplier of the raw entities a quiz is generated from.
#[async_trait]
pub trait QuizDataSource: Send + Sync {
    /// Fetch every character.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the characters cannot be loaded.
    async fn fetch_characters(&self) -> Result<Vec<Character>, FetchError>;

    /// Fetch every spell.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the spells cannot be loaded.
    async fn fetch_spells(&self) -> Result<Vec<Spell>, FetchError>;
}

#[async_trait]
impl<T: QuizDataSource + ?Sized> QuizDataSource for Arc<T> {
    async fn fetch_characters(&self) -> Result<Vec<Character>, FetchError> {
        (**self).fetch_characters().await
    }

    async fn fetch_spells(&self) -> Result<Vec<Spell>, FetchError> {
        (**self).fetch_spells().await
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// Fixed entity lists, for offline play and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    characters: Vec<Character>,
    spells: Vec<Spell>,
}

impl InMemorySource {
    #[must_use]
    pub fn new(characters: Vec<Character>, spells: Vec<Spell>) -> Self {
        Self { characters, spells }
    }
}

#[async_trait]
impl QuizDataSource for InMemorySource {
    async fn fetch_characters(&self) -> Result<Vec<Character>, FetchError> {
        Ok(self.characters.clone())
    }

    async fn fetch_spells(&self) -> Result<Vec<Spell>, FetchError> {
        Ok(self.spells.clone())
    }
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

/// JSON client for the Harry Potter API.
#[derive(Clone)]
pub struct HpApiClient {
    client: Client,
    config: HpApiConfig,
}

impl HpApiClient {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(HpApiConfig::from_env())
    }

    #[must_use]
    pub fn new(config: HpApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Characters sorted into `house`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` for transport, status, or decode failures.
    pub async fn characters_by_house(&self, house: House) -> Result<Vec<Character>, FetchError> {
        self.get_json(&house_path(house)).await
    }

    /// Hogwarts students only.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` for transport, status, or decode failures.
    pub async fn students(&self) -> Result<Vec<Character>, FetchError> {
        self.get_json("characters/students").await
    }

    /// Hogwarts staff only.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` for transport, status, or decode failures.
    pub async fn staff(&self) -> Result<Vec<Character>, FetchError> {
        self.get_json("characters/staff").await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.url(path);
        tracing::debug!(%url, "fetching");

        let response = self.client.get(&url).send().await?;
        check_status(response.status())?;
        let body = response.bytes().await?;
        decode(&body)
    }
}

/// The API keys house routes by lowercase name.
fn house_path(house: House) -> String {
    format!("characters/house/{}", house.name().to_lowercase())
}

fn check_status(status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::HttpStatus(status))
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, FetchError> {
    Ok(serde_json::from_slice(body)?)
}

#[async_trait]
impl QuizDataSource for HpApiClient {
    async fn fetch_characters(&self) -> Result<Vec<Character>, FetchError> {
        self.get_json("characters").await
    }

    async fn fetch_spells(&self) -> Result<Vec<Spell>, FetchError> {
        self.get_json("spells").await
    }
}
