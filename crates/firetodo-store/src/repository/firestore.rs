//! Firestore Item Store
//!
//! `ItemStore` over the Firestore REST API using reqwest.

use async_trait::async_trait;
use log::{debug, info, warn};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, RequestBuilder, Response, StatusCode};

use super::document::{self, Document, ErrorBody, ListResponse, FIELD_COMPLETED};
use super::traits::ItemStore;
use crate::config::StoreConfig;
use crate::domain::{Item, ItemId, ItemInput, StoreError, StoreResult};

/// Characters escaped when a document id is used as a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Remote item collection backed by Firestore
pub struct FirestoreStore {
    client: Client,
    collection_url: String,
    api_key: Option<String>,
}

impl FirestoreStore {
    pub fn new(config: &StoreConfig) -> StoreResult<Self> {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &StoreConfig) -> StoreResult<Self> {
        config
            .validate()
            .map_err(|e| StoreError::Config(e.to_string()))?;
        Ok(Self {
            client,
            collection_url: config.collection_url(),
            api_key: config.api_key.clone().filter(|key| !key.is_empty()),
        })
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    fn document_url(&self, id: &ItemId) -> String {
        format!(
            "{}/{}",
            self.collection_url,
            utf8_percent_encode(id.as_str(), PATH_SEGMENT)
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.query(&[("key", key.as_str())]),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> StoreResult<Response> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(error_from_status(status, &body))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ItemStore for FirestoreStore {
    async fn list(&self) -> StoreResult<Vec<Item>> {
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut request = self.client.get(&self.collection_url);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }
            let listing: ListResponse = self.send(request).await?.json().await?;

            for doc in listing.documents {
                match doc.into_item() {
                    Ok(item) => items.push(item),
                    Err(e) => warn!("Skipping malformed document: {}", e),
                }
            }

            // An absent or empty token marks the last page
            match listing.next_page_token.filter(|token| !token.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }
        debug!("Listed {} items from {}", items.len(), self.collection_url);
        Ok(items)
    }

    async fn insert(&self, input: &ItemInput) -> StoreResult<ItemId> {
        let request = self
            .client
            .post(&self.collection_url)
            .json(&document::encode_input(input));
        let created: Document = self.send(request).await?.json().await?;
        let id = created.id()?;
        info!("Created item {}", id);
        Ok(id)
    }

    async fn set_completed(&self, id: &ItemId, completed: bool) -> StoreResult<()> {
        let request = self
            .client
            .patch(self.document_url(id))
            .query(&[
                ("updateMask.fieldPaths", FIELD_COMPLETED),
                ("currentDocument.exists", "true"),
            ])
            .json(&document::encode_completed(completed));
        self.send(request).await?;
        debug!("Set item {} completed={}", id, completed);
        Ok(())
    }

    async fn remove(&self, id: &ItemId) -> StoreResult<()> {
        self.send(self.client.delete(self.document_url(id))).await?;
        info!("Deleted item {}", id);
        Ok(())
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            StoreError::Decode(error.to_string())
        } else if let Some(status) = error.status() {
            error_from_status(status, "")
        } else {
            StoreError::Network(error.to_string())
        }
    }
}

fn error_from_status(status: StatusCode, body: &str) -> StoreError {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error }) => match error.status {
            Some(code) if !error.message.is_empty() => format!("{}: {}", code, error.message),
            Some(code) => code,
            None => error.message,
        },
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string(),
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => StoreError::Auth(message),
        StatusCode::NOT_FOUND => StoreError::NotFound(message),
        _ => StoreError::Backend {
            status: status.as_u16(),
            message,
        },
    }
}
