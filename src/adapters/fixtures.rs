use crate::domain::model::{Paging, ProductDetail, SearchResponse};
use crate::domain::ports::{PageRequest, ProductSource, Storage};
use crate::utils::error::{MarketError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Keyword to fixture file (without extension) bundled with the app.
pub fn default_search_files() -> HashMap<String, String> {
    [
        ("arroz", "search-MLA-arroz"),
        ("cafe", "search-MLA-cafe"),
        ("camisa", "search-MLA-camisa"),
        ("zapatillas", "search-MLA-zapatillas"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Serves searches and details from static JSON files.
///
/// Searches only resolve for keywords present in the lookup table; any other
/// query is a successful search with no results.
pub struct FixtureSource<S: Storage> {
    storage: S,
    search_files: HashMap<String, String>,
}

impl<S: Storage> FixtureSource<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            search_files: default_search_files(),
        }
    }

    pub fn with_search_files(mut self, search_files: HashMap<String, String>) -> Self {
        self.search_files = search_files
            .into_iter()
            .map(|(keyword, file)| (keyword.to_lowercase(), file))
            .collect();
        self
    }

    pub fn search_file_for(&self, query: &str) -> Option<String> {
        self.search_files
            .get(&query.trim().to_lowercase())
            .map(|file| format!("{}.json", file))
    }

    pub fn detail_file_for(product_id: &str) -> String {
        format!("item-{}.json", product_id.trim().to_uppercase())
    }

    async fn load<T: DeserializeOwned>(&self, file: &str) -> Result<T> {
        let bytes = self
            .storage
            .read_file(file)
            .await
            .map_err(|e| MarketError::Fixture {
                file: file.to_string(),
                reason: e.to_string(),
            })?;

        let parsed = serde_json::from_slice(&bytes).map_err(|e| MarketError::Fixture {
            file: file.to_string(),
            reason: e.to_string(),
        })?;
        tracing::debug!("Fixture {} loaded ({} bytes)", file, bytes.len());
        Ok(parsed)
    }
}

fn paginate(mut response: SearchResponse, page: PageRequest) -> SearchResponse {
    let total = response.results.len();
    let start = (page.offset as usize).min(total);
    let end = start.saturating_add(page.limit as usize).min(total);

    response.results = response.results.drain(start..end).collect();
    response.paging = Paging {
        total: total as u32,
        offset: page.offset,
        limit: page.limit,
        primary_results: total as u32,
    };
    response
}

#[async_trait]
impl<S: Storage> ProductSource for FixtureSource<S> {
    async fn search(&self, query: &str, page: PageRequest) -> Result<SearchResponse> {
        let Some(file) = self.search_file_for(query) else {
            tracing::debug!("No fixture mapped for query '{}'", query);
            return Ok(SearchResponse {
                query: Some(query.to_string()),
                paging: Paging {
                    offset: page.offset,
                    limit: page.limit,
                    ..Paging::default()
                },
                ..SearchResponse::default()
            });
        };

        let response: SearchResponse = self.load(&file).await?;
        Ok(paginate(response, page))
    }

    async fn product_detail(&self, product_id: &str) -> Result<ProductDetail> {
        self.load(&Self::detail_file_for(product_id)).await
    }
}
