use crate::app::detail_view::ProductDetailViewModel;
use crate::app::render::{render_detail_state, render_search_state};
use crate::app::search_view::SearchViewModel;
use crate::domain::analytics::AnalyticsEvent;
use crate::domain::ports::AnalyticsSink;
use crate::utils::error::Result;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const HELP_TEXT: &str = "Digite um termo de busca, o número de um produto da lista para ver detalhes, n/p para paginar, b para voltar, q para sair. Comece com / para buscar um termo numérico (ex.: /7891).";

pub const LAST_PAGE_TEXT: &str = "Não há mais resultados.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Search,
    Detail,
}

/// Line-driven front end over the two view models: one line in, one screen out.
pub struct Browser {
    search: SearchViewModel,
    detail: ProductDetailViewModel,
    analytics: Arc<dyn AnalyticsSink>,
    screen: Screen,
}

impl Browser {
    pub fn new(
        search: SearchViewModel,
        detail: ProductDetailViewModel,
        analytics: Arc<dyn AnalyticsSink>,
    ) -> Self {
        Self {
            search,
            detail,
            analytics,
            screen: Screen::Search,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        self.analytics
            .log_event(AnalyticsEvent::screen_view("search_screen", "SearchScreen"));
        writeln!(out, "{}", HELP_TEXT)?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if !self.handle(line.trim(), out).await? {
                break;
            }
        }
        Ok(())
    }

    /// Handles one line of input. Returns false when the user asked to quit.
    pub async fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool> {
        match (self.screen, line) {
            (_, "q") => return Ok(false),
            (_, "?") => writeln!(out, "{}", HELP_TEXT)?,
            (Screen::Detail, "b") => {
                self.analytics
                    .log_event(AnalyticsEvent::custom("click_back_button"));
                self.detail.clear_product_detail();
                self.screen = Screen::Search;
                self.show_search(out)?;
            }
            (Screen::Search, "n") => {
                if self.search.next_page() {
                    self.search.wait_idle().await;
                    self.show_search(out)?;
                } else {
                    writeln!(out, "{}", LAST_PAGE_TEXT)?;
                }
            }
            (Screen::Search, "p") => {
                if self.search.previous_page() {
                    self.search.wait_idle().await;
                }
                self.show_search(out)?;
            }
            (Screen::Search, entry) if entry.starts_with('/') => {
                self.search_for(entry[1..].trim(), out).await?;
            }
            (Screen::Search, entry) if self.is_product_number(entry) => {
                self.open_product(entry, out).await?;
            }
            (Screen::Detail, _) => {
                writeln!(out, "Use b para voltar à busca ou q para sair.")?;
            }
            (Screen::Search, query) => {
                self.search_for(query, out).await?;
            }
        }
        Ok(true)
    }

    /// Digits pick a product only while a list is on screen; otherwise they
    /// are searched like any other term.
    fn is_product_number(&self, entry: &str) -> bool {
        !entry.is_empty()
            && entry.chars().all(|c| c.is_ascii_digit())
            && !self.search.current_state().products.is_empty()
    }

    async fn search_for<W: Write>(&mut self, query: &str, out: &mut W) -> Result<()> {
        if !query.is_empty() {
            self.analytics.log_event(AnalyticsEvent::search(query));
        }
        self.search.search_products(query);
        self.search.wait_idle().await;
        self.show_search(out)
    }

    async fn open_product<W: Write>(&mut self, entry: &str, out: &mut W) -> Result<()> {
        let state = self.search.current_state();
        let page = self.search.page();
        let product = entry
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(page.offset as usize + 1))
            .and_then(|i| state.products.get(i));

        let Some(product) = product else {
            writeln!(out, "Produto {} não está nesta página.", entry)?;
            return Ok(());
        };

        self.analytics.log_event(
            AnalyticsEvent::custom("click_product_item").with_param("item_id", product.id.as_str()),
        );
        self.analytics.log_event(AnalyticsEvent::screen_view(
            "product_detail_screen",
            "ProductDetailScreen",
        ));

        self.screen = Screen::Detail;
        self.detail.load_product_detail(&product.id);
        self.detail.wait_idle().await;
        writeln!(out, "{}", render_detail_state(&self.detail.current_state()))?;
        Ok(())
    }

    fn show_search<W: Write>(&self, out: &mut W) -> Result<()> {
        let rendered = render_search_state(&self.search.current_state(), self.search.page());
        if !rendered.is_empty() {
            writeln!(out, "{}", rendered)?;
        }
        Ok(())
    }
}
