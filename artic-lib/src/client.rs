//! HTTP client for the Art Institute of Chicago artworks API

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::api::Page;
use crate::api::PageProvider;
use crate::error::FetchError;
use crate::model::Artwork;
use crate::model::Field;

/// Default base URL of the public API.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Client for the artworks collection endpoint.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across threads safely.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use artic_lib::ArticClient;
///
/// let client = ArticClient::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
#[derive(Clone)]
pub struct ArticClient {
    inner: Arc<ArticClientInner>,
}

struct ArticClientInner {
    base_url: String,
    http_client: Client,
    timeout: Option<Duration>,
}

impl ArticClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> ArticClientBuilder {
        ArticClientBuilder::new()
    }

    /// Returns the base URL of the API.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Builds the URL for one page of the artworks listing.
    pub fn page_url(&self, page: usize, page_size: usize, fields: &[Field]) -> Result<Url, FetchError> {
        let base = format!("{}/artworks", self.inner.base_url.trim_end_matches('/'));
        let mut url = Url::parse(&base).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", base, e)))?;
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("limit", &page_size.to_string())
            .append_pair("fields", &Field::join(fields));
        Ok(url)
    }

    fn map_send_error(&self, error: reqwest::Error) -> FetchError {
        match self.inner.timeout {
            Some(timeout) if error.is_timeout() => FetchError::Timeout(timeout),
            _ => FetchError::Network(error),
        }
    }
}

impl std::fmt::Debug for ArticClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArticClient")
            .field("base_url", &self.inner.base_url)
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PageProvider for ArticClient {
    async fn fetch_page(&self, page: usize, page_size: usize, fields: &[Field]) -> Result<Page, FetchError> {
        let url = self.page_url(page, page_size, fields)?;
        log::debug!("GET {}", url);

        let mut request = self.inner.http_client.get(url);
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            return Err(FetchError::http(status.as_u16(), body));
        }

        parse_page(&body)
    }
}

/// Parses a listing response body into a [`Page`].
pub(crate) fn parse_page(body: &str) -> Result<Page, FetchError> {
    let response: ArtworksResponse =
        serde_json::from_str(body).map_err(|e| FetchError::parse_with_body(e.to_string(), body))?;

    let mut page = Page::new(response.data).with_total_count(response.pagination.total);
    if let Some(next_url) = response.pagination.next_url {
        page = page.with_next_url(next_url);
    }
    Ok(page)
}

/// Listing response from the artworks endpoint.
#[derive(Debug, Deserialize)]
struct ArtworksResponse {
    pagination: Pagination,
    data: Vec<Artwork>,
}

#[derive(Debug, Deserialize)]
struct Pagination {
    total: usize,
    #[serde(default)]
    next_url: Option<String>,
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for constructing an [`ArticClient`].
///
/// # Example
///
/// ```ignore
/// let client = ArticClient::builder()
///     .base_url("https://api.artic.edu/api/v1")
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub struct ArticClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl ArticClientBuilder {
    /// Creates a new builder pointing at the public API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the API base URL.
    ///
    /// Defaults to [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`ArticClient`].
    pub fn build(self) -> Result<ArticClient, FetchError> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(ArticClient {
            inner: Arc::new(ArticClientInner {
                base_url: self.base_url,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ArticClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ArtworkId;

    fn client(base: &str) -> ArticClient {
        ArticClient::builder()
            .base_url(base)
            .http_client(Client::new())
            .build()
            .unwrap()
    }

    #[test]
    fn test_page_url() {
        let url = client("https://api.artic.edu/api/v1/")
            .page_url(3, 12, Field::ID_ONLY)
            .unwrap();
        assert_eq!(url.as_str(), "https://api.artic.edu/api/v1/artworks?page=3&limit=12&fields=id");
    }

    #[test]
    fn test_page_url_encodes_field_list() {
        let url = client(DEFAULT_BASE_URL).page_url(1, 100, &[Field::Id, Field::Title]).unwrap();
        let fields = url
            .query_pairs()
            .find(|(k, _)| k == "fields")
            .map(|(_, v)| v.into_owned());
        assert_eq!(fields.as_deref(), Some("id,title"));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = client("not a url").page_url(1, 12, Field::ID_ONLY).unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[test]
    fn test_parse_page_with_next() {
        let body = r#"{
            "pagination": {
                "total": 129884,
                "limit": 2,
                "offset": 0,
                "total_pages": 64942,
                "current_page": 1,
                "next_url": "https://api.artic.edu/api/v1/artworks?page=2&limit=2"
            },
            "data": [
                {"id": 1, "title": "First", "date_start": 1900, "date_end": 1901},
                {"id": 2, "title": null}
            ],
            "config": {"iiif_url": "https://www.artic.edu/iiif/2"}
        }"#;

        let page = parse_page(body).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page.total_count(), 129884);
        assert!(page.has_next());
        assert_eq!(page.records()[0].id, ArtworkId::new(1));
        assert_eq!(page.records()[1].title, None);
    }

    #[test]
    fn test_parse_last_page() {
        let body = r#"{"pagination": {"total": 1, "next_url": null}, "data": [{"id": 9}]}"#;
        let page = parse_page(body).unwrap();
        assert!(!page.has_next());
        assert_eq!(page.next_url(), None);
    }

    #[test]
    fn test_parse_error_keeps_body() {
        let err = parse_page("<html>oops</html>").unwrap_err();
        match err {
            FetchError::Parse { body, .. } => assert_eq!(body.as_deref(), Some("<html>oops</html>")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
