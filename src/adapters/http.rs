use crate::domain::model::{ProductDetail, SearchResponse};
use crate::domain::ports::{PageRequest, ProductSource};
use crate::utils::error::{MarketError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.mercadolibre.com/";
pub const SITE_ID_BRAZIL: &str = "MLB";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Typed client for the two marketplace endpoints this app uses.
#[derive(Debug, Clone)]
pub struct MarketplaceClient {
    client: Client,
    base_url: Url,
    site_id: String,
}

impl MarketplaceClient {
    pub fn new(base_url: &str, site_id: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| MarketError::InvalidConfigValueError {
            field: "api.base_url".to_string(),
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url,
            site_id: site_id.into(),
        })
    }

    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| MarketError::ConfigError {
                message: format!("base URL '{}' cannot carry a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, query: &[(&str, String)]) -> Result<T> {
        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(MarketError::from_transport)?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(MarketError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(MarketError::from_transport)?;
        tracing::debug!("API response body: {} bytes", body.len());

        let trimmed = String::from_utf8_lossy(&body);
        let trimmed = trimmed.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Err(MarketError::EmptyBody);
        }

        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn search_products(&self, query: &str, page: PageRequest) -> Result<SearchResponse> {
        let url = self.endpoint(&["sites", &self.site_id, "search"])?;
        self.get_json(
            url,
            &[
                ("q", query.to_string()),
                ("limit", page.limit.to_string()),
                ("offset", page.offset.to_string()),
            ],
        )
        .await
    }

    pub async fn get_product_detail(&self, item_id: &str) -> Result<ProductDetail> {
        let url = self.endpoint(&["items", item_id])?;
        self.get_json(url, &[]).await
    }
}

#[async_trait]
impl ProductSource for MarketplaceClient {
    async fn search(&self, query: &str, page: PageRequest) -> Result<SearchResponse> {
        self.search_products(query, page).await
    }

    async fn product_detail(&self, product_id: &str) -> Result<ProductDetail> {
        self.get_product_detail(product_id).await
    }
}
