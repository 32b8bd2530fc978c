use mercado_search::adapters::analytics::RecordingAnalytics;
use mercado_search::adapters::fixtures::FixtureSource;
use mercado_search::adapters::storage::LocalStorage;
use mercado_search::app::browse::{Browser, Screen, LAST_PAGE_TEXT};
use mercado_search::app::render::NO_RESULTS_TEXT;
use mercado_search::{
    GetProductDetailUseCase, MarketplaceRepository, ProductDetailViewModel,
    SearchProductsUseCase, SearchViewModel,
};
use std::sync::Arc;

fn browser(analytics: &RecordingAnalytics, page_size: u32) -> Browser {
    let fixtures = format!("{}/fixtures", env!("CARGO_MANIFEST_DIR"));
    let repository =
        MarketplaceRepository::new(Arc::new(FixtureSource::new(LocalStorage::new(fixtures))));
    let search = SearchViewModel::new(SearchProductsUseCase::new(repository.clone()))
        .with_page_size(page_size);
    let detail = ProductDetailViewModel::new(
        GetProductDetailUseCase::new(repository),
        Arc::new(analytics.clone()),
    );
    Browser::new(search, detail, Arc::new(analytics.clone()))
}

#[tokio::test]
async fn test_search_open_and_back() {
    let analytics = RecordingAnalytics::new();
    let mut browser = browser(&analytics, 50);
    let mut out = Vec::new();

    browser
        .run(&b"arroz\n1\nb\nq\n"[..], &mut out)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("  1. Arroz Largo Fino Gallo Oro 1 Kg"));
    assert!(text.contains("Preço: ARS 1.890,00"));
    assert!(text.contains("Frete grátis"));
    assert_eq!(browser.screen(), Screen::Search);

    assert_eq!(
        analytics.event_names(),
        vec![
            "screen_view",
            "search",
            "click_product_item",
            "screen_view",
            "view_item",
            "click_back_button",
        ]
    );
}

#[tokio::test]
async fn test_unknown_query_and_out_of_range_item() {
    let analytics = RecordingAnalytics::new();
    let mut browser = browser(&analytics, 50);
    let mut out = Vec::new();

    browser
        .run(&b"geladeira\narroz\n7\n"[..], &mut out)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains(NO_RESULTS_TEXT));
    assert!(text.contains("Produto 7 não está nesta página."));
    assert_eq!(browser.screen(), Screen::Search);
}

fn search_terms(analytics: &RecordingAnalytics) -> Vec<String> {
    analytics
        .events()
        .iter()
        .filter(|e| e.name == "search")
        .filter_map(|e| e.param_str("search_term").map(str::to_string))
        .collect()
}

#[tokio::test]
async fn test_numeric_queries_are_searchable() {
    let analytics = RecordingAnalytics::new();
    let mut browser = browser(&analytics, 50);
    let mut out = Vec::new();

    // With no list on screen digits are a search term; with a list, a slash forces a search.
    browser
        .run(&b"7891\narroz\n/7891\n"[..], &mut out)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches(NO_RESULTS_TEXT).count(), 2);
    assert!(!text.contains("não está nesta página"));
    assert_eq!(search_terms(&analytics), vec!["7891", "arroz", "7891"]);
    assert!(!analytics.event_names().contains(&"click_product_item".to_string()));
    assert_eq!(browser.screen(), Screen::Search);
}

#[tokio::test]
async fn test_next_page_stops_on_last_page() {
    let analytics = RecordingAnalytics::new();
    let mut browser = browser(&analytics, 2);
    let mut out = Vec::new();

    browser
        .run(&b"cafe\nn\nn\n"[..], &mut out)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("-- resultados 3-3 --"));
    assert!(text.contains(LAST_PAGE_TEXT));
    assert!(!text.contains(NO_RESULTS_TEXT));
}

#[tokio::test]
async fn test_paging_numbers_continue_across_pages() {
    let analytics = RecordingAnalytics::new();
    let mut browser = browser(&analytics, 2);
    let mut out = Vec::new();

    browser
        .run(&b"zapatillas\nn\n3\n"[..], &mut out)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("  3. Zapatillas Topper Urbanas Lona Unisex"));
    assert!(text.contains("-- resultados 3-3 --"));
    assert!(text.contains("Condição: New"));
    assert_eq!(browser.screen(), Screen::Detail);
}
