pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use app::detail_view::{ProductDetailViewModel, ProductDetailViewState};
pub use app::search_view::{SearchViewModel, SearchViewState};
pub use config::settings::AppSettings;
pub use crate::core::repository::MarketplaceRepository;
pub use crate::core::usecase::{GetProductDetailUseCase, ProductPage, SearchProductsUseCase};
pub use domain::resource::Resource;
pub use utils::error::{MarketError, Result};
