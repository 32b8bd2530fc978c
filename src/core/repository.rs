use crate::domain::model::{ProductDetail, SearchResponse};
use crate::domain::ports::{PageRequest, ProductSource};
use crate::domain::resource::Resource;
use crate::utils::error::Operation;
use futures_util::future;
use futures_util::stream::{self, BoxStream, StreamExt};
use std::sync::Arc;

/// Wraps a [`ProductSource`] and turns each call into a `Loading` then
/// terminal [`Resource`] stream, translating failures into user messages.
///
/// The streams are lazy: nothing is fetched until the first poll after
/// `Loading`, and dropping the stream abandons the request.
#[derive(Clone)]
pub struct MarketplaceRepository {
    source: Arc<dyn ProductSource>,
}

impl MarketplaceRepository {
    pub fn new(source: Arc<dyn ProductSource>) -> Self {
        Self { source }
    }

    pub fn search_products<'a>(
        &'a self,
        query: &'a str,
        page: PageRequest,
    ) -> BoxStream<'a, Resource<SearchResponse>> {
        let fetch = async move {
            tracing::debug!(
                "Searching products with query: {} (limit {}, offset {})",
                query,
                page.limit,
                page.offset
            );

            match self.source.search(query, page).await {
                Ok(response) => {
                    tracing::debug!(
                        "Search successful. Found {} products",
                        response.results.len()
                    );
                    Resource::Success(response)
                }
                Err(e) => {
                    tracing::error!("Search for '{}' failed: {}", query, e);
                    Resource::Error(e.user_message(Operation::Search))
                }
            }
        };

        stream::once(future::ready(Resource::Loading))
            .chain(stream::once(fetch))
            .boxed()
    }

    pub fn get_product_detail<'a>(
        &'a self,
        product_id: &'a str,
    ) -> BoxStream<'a, Resource<ProductDetail>> {
        let fetch = async move {
            tracing::debug!("Getting product detail for ID: {}", product_id);

            match self.source.product_detail(product_id).await {
                Ok(detail) => {
                    tracing::debug!("Product detail loaded successfully");
                    Resource::Success(detail)
                }
                Err(e) => {
                    tracing::error!("Product detail for '{}' failed: {}", product_id, e);
                    Resource::Error(e.user_message(Operation::Detail))
                }
            }
        };

        stream::once(future::ready(Resource::Loading))
            .chain(stream::once(fetch))
            .boxed()
    }
}
