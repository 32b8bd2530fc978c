use clap::Parser;
use mercado_search::app::browse::Browser;
use mercado_search::app::render::{render_detail_state, render_search_state};
use mercado_search::domain::analytics::AnalyticsEvent;
use mercado_search::utils::{logger, validation::Validate};
use mercado_search::{
    AppSettings, CliConfig, Command, GetProductDetailUseCase, MarketplaceRepository,
    ProductDetailViewModel, SearchProductsUseCase, SearchViewModel,
};
use std::io::Write;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting mercado-search");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match cli.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    run(cli.command, settings).await
}

async fn run(command: Command, settings: AppSettings) -> anyhow::Result<()> {
    let repository = MarketplaceRepository::new(settings.product_source()?);
    let analytics = settings.analytics_sink();

    let mut search = SearchViewModel::new(SearchProductsUseCase::new(repository.clone()))
        .with_page_size(settings.page_size);
    let mut detail =
        ProductDetailViewModel::new(GetProductDetailUseCase::new(repository), analytics.clone());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Search { query, offset } => {
            analytics.log_event(AnalyticsEvent::search(&query));
            search.search_products_from(&query, offset);
            search.wait_idle().await;

            let state = search.current_state();
            writeln!(out, "{}", render_search_state(&state, search.page()))?;
            if state.error_message.is_some() {
                std::process::exit(1);
            }
        }
        Command::Detail { id } => {
            analytics.log_event(AnalyticsEvent::screen_view(
                "product_detail_screen",
                "ProductDetailScreen",
            ));
            detail.load_product_detail(&id);
            detail.wait_idle().await;

            let state = detail.current_state();
            writeln!(out, "{}", render_detail_state(&state))?;
            if state.error_message.is_some() {
                std::process::exit(1);
            }
        }
        Command::Browse => {
            let mut browser = Browser::new(search, detail, analytics);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            browser.run(stdin, &mut out).await?;
        }
    }

    Ok(())
}
