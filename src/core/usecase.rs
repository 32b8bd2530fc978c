use crate::core::repository::MarketplaceRepository;
use crate::domain::model::{Paging, Product, ProductDetail};
use crate::domain::ports::PageRequest;
use crate::domain::resource::Resource;
use futures_util::stream::{BoxStream, StreamExt};

/// One page of search hits together with the paging block it came with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub paging: Paging,
}

impl ProductPage {
    /// Whether another page follows this one. Without a reported total, a
    /// short page marks the end of the list.
    pub fn has_more(&self, page: PageRequest) -> bool {
        let shown = page.offset as u64 + self.products.len() as u64;
        if self.paging.total > 0 {
            shown < self.paging.total as u64 && !self.products.is_empty()
        } else {
            self.products.len() as u64 >= page.limit as u64 && page.limit > 0
        }
    }
}

/// Search flow as the presentation layer sees it: only the product list.
#[derive(Clone)]
pub struct SearchProductsUseCase {
    repository: MarketplaceRepository,
}

impl SearchProductsUseCase {
    pub fn new(repository: MarketplaceRepository) -> Self {
        Self { repository }
    }

    pub fn invoke<'a>(
        &'a self,
        query: &'a str,
        page: PageRequest,
    ) -> BoxStream<'a, Resource<Vec<Product>>> {
        self.invoke_paged(query, page)
            .map(|resource| resource.map(|page| page.products))
            .boxed()
    }

    pub fn invoke_paged<'a>(
        &'a self,
        query: &'a str,
        page: PageRequest,
    ) -> BoxStream<'a, Resource<ProductPage>> {
        self.repository
            .search_products(query, page)
            .map(|resource| {
                resource.map(|response| ProductPage {
                    products: response.results,
                    paging: response.paging,
                })
            })
            .boxed()
    }
}

#[derive(Clone)]
pub struct GetProductDetailUseCase {
    repository: MarketplaceRepository,
}

impl GetProductDetailUseCase {
    pub fn new(repository: MarketplaceRepository) -> Self {
        Self { repository }
    }

    pub fn invoke<'a>(&'a self, product_id: &'a str) -> BoxStream<'a, Resource<ProductDetail>> {
        self.repository.get_product_detail(product_id)
    }
}
