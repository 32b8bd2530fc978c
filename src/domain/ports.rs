use crate::domain::analytics::AnalyticsEvent;
use crate::domain::model::{ProductDetail, SearchResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Slice of a result list to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u32,
}

impl PageRequest {
    pub fn first(limit: u32) -> Self {
        Self { limit, offset: 0 }
    }

    pub fn next(self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset.saturating_add(self.limit),
        }
    }

    pub fn previous(self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset.saturating_sub(self.limit),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

/// Where search results and product details come from.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn search(&self, query: &str, page: PageRequest) -> Result<SearchResponse>;
    async fn product_detail(&self, product_id: &str) -> Result<ProductDetail>;
}

pub trait AnalyticsSink: Send + Sync {
    fn log_event(&self, event: AnalyticsEvent);
}
