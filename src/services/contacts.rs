//! Address book persistence
//!
//! Paths are built by the controllers and passed verbatim:
//! - create: `/addressbooks/{bookId}/contacts`
//! - list: `/addressbooks/{ownerId}/contacts.json`

use crate::{
    config::Settings,
    contact::{Card, Contact},
    Result,
};
use async_trait::async_trait;
use tracing::debug;

/// Content type of jCard request bodies
pub const JCARD_CONTENT_TYPE: &str = "application/vcard+json";

/// Path contacts are created under for an address book
pub fn create_path(book_id: &str) -> String {
    format!("/addressbooks/{}/contacts", book_id)
}

/// Path the contacts of an owner are listed from
pub fn list_path(owner_id: &str) -> String {
    format!("/addressbooks/{}/contacts.json", owner_id)
}

/// Persistence collaborator for contacts
#[async_trait]
pub trait ContactsService: Send + Sync {
    /// Persist a card under `path`
    ///
    /// Returns the stored contact when the server echoes it back.
    async fn create(&self, path: &str, card: Card) -> Result<Option<Contact>>;

    /// List the contacts found at `path`
    async fn list(&self, path: &str) -> Result<Vec<Contact>>;
}

/// REST implementation of [`ContactsService`]
#[derive(Debug, Clone)]
pub struct HttpContactsService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpContactsService {
    /// Create a client for the server configured in `settings`
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            client: super::build_client(settings)?,
            base_url: super::base_url(settings)?,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ContactsService for HttpContactsService {
    async fn create(&self, path: &str, card: Card) -> Result<Option<Contact>> {
        let url = self.url(path);
        debug!("POST {} (uid: {:?})", url, card.uid());

        let body = serde_json::to_vec(&card)?;
        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, JCARD_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;
        let response = super::check_status(response).await?;

        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    async fn list(&self, path: &str) -> Result<Vec<Contact>> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let response = super::check_status(response).await?;
        let bytes = response.bytes().await?;

        Ok(serde_json::from_slice(&bytes)?)
    }
}
