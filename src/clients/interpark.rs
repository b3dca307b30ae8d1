use reqwest::Client;
use url::Url;

use crate::config::CatalogConfig;
use crate::models::book::{Book, BookListResponse};
use crate::services::{BookCatalog, CatalogError};

/// HTTP client for the Interpark book catalog.
///
/// Single-attempt requests only: no retry, no backoff. Failures carry no
/// recovery information beyond the [`CatalogError`] variant.
#[derive(Clone)]
pub struct InterparkClient {
    client: Client,
    base_url: String,
    api_key: String,
    category_id: u32,
}

impl InterparkClient {
    /// Creates a client from the `[catalog]` config section.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &CatalogConfig) -> anyhow::Result<Self> {
        let timeout = std::time::Duration::from_secs(u64::from(config.request_timeout_seconds));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hondana/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            category_id: config.category_id,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, CatalogError> {
        let joined = format!("{}/{path}", self.base_url.trim_end_matches('/'));
        Ok(Url::parse(&joined)?)
    }

    fn search_url(&self, keyword: &str) -> Result<Url, CatalogError> {
        let mut url = self.endpoint("api/search.api")?;
        url.query_pairs_mut()
            .append_pair("output", "json")
            .append_pair("key", &self.api_key)
            .append_pair("query", keyword);
        Ok(url)
    }

    fn best_seller_url(&self) -> Result<Url, CatalogError> {
        let mut url = self.endpoint("api/bestSeller.api")?;
        url.query_pairs_mut()
            .append_pair("output", "json")
            .append_pair("categoryId", &self.category_id.to_string())
            .append_pair("key", &self.api_key);
        Ok(url)
    }

    async fn fetch_books(&self, url: Url) -> Result<Vec<Book>, CatalogError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        let body: BookListResponse = response.json().await?;
        Ok(body.books)
    }
}

#[async_trait::async_trait]
impl BookCatalog for InterparkClient {
    async fn search(&self, keyword: &str) -> Result<Vec<Book>, CatalogError> {
        let url = self.search_url(keyword)?;
        self.fetch_books(url).await
    }

    async fn best_sellers(&self) -> Result<Vec<Book>, CatalogError> {
        let url = self.best_seller_url()?;
        self.fetch_books(url).await
    }
}
