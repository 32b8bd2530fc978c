// Adapters layer: concrete implementations of the domain ports.

pub mod analytics;
pub mod fixtures;
pub mod http;
pub mod storage;
