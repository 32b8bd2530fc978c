pub mod repository;
pub mod usecase;

pub use crate::domain::model::{Product, ProductDetail, SearchResponse};
pub use crate::domain::ports::{AnalyticsSink, PageRequest, ProductSource, Storage};
pub use crate::domain::resource::Resource;
pub use crate::utils::error::Result;
