//! Bookmark API client.
//!
//! Typed wrapper over the remote bookmark endpoints. Every call goes straight
//! to the network: no retries, no timeout, no caching.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::types::bookmark::{
    ArchiveStatus, Bookmark, BookmarkId, BookmarkPayload, CodeImage, EditDraft,
};
use crate::types::errors::ClientError;

/// Trait defining the remote bookmark operations panels depend on.
#[allow(async_fn_in_trait)]
pub trait BookmarkClientTrait {
    async fn fetch_one(&self, id: BookmarkId) -> Result<Bookmark, ClientError>;
    async fn update(&self, id: BookmarkId, draft: &EditDraft) -> Result<(), ClientError>;
    async fn remove(&self, id: BookmarkId) -> Result<(), ClientError>;
    async fn fetch_code_image(&self, id: BookmarkId) -> Result<CodeImage, ClientError>;
    /// Flips the archived flag server-side and returns the new value.
    async fn toggle_archive(&self, id: BookmarkId) -> Result<bool, ClientError>;
}

/// HTTP client for `/api/bookmarks`.
pub struct BookmarkClient {
    http: reqwest::Client,
    base_url: String,
}

impl BookmarkClient {
    /// Creates a client rooted at `base_url` (e.g. `http://127.0.0.1:5000`).
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        // Without this the server answers deletes with an HTML redirect.
        headers.insert(
            HeaderName::from_static("x-requested-with"),
            HeaderValue::from_static("XMLHttpRequest"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::TransportFailure(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn bookmark_url(&self, id: BookmarkId) -> String {
        format!("{}/api/bookmarks/{}", self.base_url, id)
    }

    async fn send(&self, op: &str, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                warn!(op, error = %e, "bookmark request failed");
                return Err(ClientError::TransportFailure(e.to_string()));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(op, status = status.as_u16(), "bookmark request rejected");
            return Err(ClientError::RequestRejected {
                status: status.as_u16(),
            });
        }

        debug!(op, status = status.as_u16(), "bookmark request ok");
        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::TransportFailure(format!("invalid response body: {}", e)))
    }
}

impl BookmarkClientTrait for BookmarkClient {
    async fn fetch_one(&self, id: BookmarkId) -> Result<Bookmark, ClientError> {
        let response = self
            .send("fetch_one", self.http.get(self.bookmark_url(id)))
            .await?;
        let payload: BookmarkPayload = Self::read_json(response).await?;
        Ok(payload.into_bookmark())
    }

    async fn update(&self, id: BookmarkId, draft: &EditDraft) -> Result<(), ClientError> {
        self.send("update", self.http.put(self.bookmark_url(id)).json(draft))
            .await?;
        Ok(())
    }

    async fn remove(&self, id: BookmarkId) -> Result<(), ClientError> {
        self.send("remove", self.http.delete(self.bookmark_url(id)))
            .await?;
        Ok(())
    }

    async fn fetch_code_image(&self, id: BookmarkId) -> Result<CodeImage, ClientError> {
        let url = format!("{}/qr", self.bookmark_url(id));
        let response = self.send("fetch_code_image", self.http.get(url)).await?;
        Self::read_json(response).await
    }

    async fn toggle_archive(&self, id: BookmarkId) -> Result<bool, ClientError> {
        let url = format!("{}/archive", self.bookmark_url(id));
        let response = self.send("toggle_archive", self.http.patch(url)).await?;
        let status: ArchiveStatus = Self::read_json(response).await?;
        Ok(status.archived)
    }
}
