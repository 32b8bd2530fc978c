pub mod browse;
pub mod detail_view;
pub mod render;
pub mod search_view;
