use crate::core::usecase::{ProductPage, SearchProductsUseCase};
use crate::domain::model::Product;
use crate::domain::ports::{PageRequest, DEFAULT_PAGE_SIZE};
use crate::domain::resource::Resource;
use futures_util::StreamExt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchViewState {
    pub is_loading: bool,
    pub products: Vec<Product>,
    pub error_message: Option<String>,
    pub show_no_results: bool,
    pub has_more_pages: bool,
}

impl SearchViewState {
    fn from_resource(resource: Resource<ProductPage>, page: PageRequest) -> Self {
        match resource {
            Resource::Loading => Self {
                is_loading: true,
                ..Self::default()
            },
            Resource::Success(result) => Self {
                show_no_results: result.products.is_empty(),
                has_more_pages: result.has_more(page),
                products: result.products,
                ..Self::default()
            },
            Resource::Error(message) => Self {
                error_message: Some(message),
                ..Self::default()
            },
        }
    }
}

/// Holds the search screen state and drives at most one search at a time.
///
/// Starting a search aborts the previous one. Updates are tagged with a
/// generation number and only applied while that generation is current, so
/// an aborted search can never overwrite a newer state.
pub struct SearchViewModel {
    use_case: SearchProductsUseCase,
    state: Arc<watch::Sender<SearchViewState>>,
    generation: Arc<AtomicU64>,
    job: Option<JoinHandle<()>>,
    last_query: Option<String>,
    page: PageRequest,
}

impl SearchViewModel {
    pub fn new(use_case: SearchProductsUseCase) -> Self {
        let (state, _) = watch::channel(SearchViewState::default());
        Self {
            use_case,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            job: None,
            last_query: None,
            page: PageRequest::first(DEFAULT_PAGE_SIZE),
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page = PageRequest::first(page_size.max(1));
        self
    }

    pub fn view_state(&self) -> watch::Receiver<SearchViewState> {
        self.state.subscribe()
    }

    pub fn current_state(&self) -> SearchViewState {
        self.state.borrow().clone()
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    pub fn search_products(&mut self, query: &str) {
        let first = PageRequest::first(self.page.limit);
        self.launch(query, first);
    }

    /// Starts a search at an arbitrary offset instead of the first page.
    pub fn search_products_from(&mut self, query: &str, offset: u32) {
        let page = PageRequest {
            limit: self.page.limit,
            offset,
        };
        self.launch(query, page);
    }

    /// Re-runs the last query one page further. Returns false when there is
    /// no query, the current page is still loading, or it was the last one.
    pub fn next_page(&mut self) -> bool {
        if !self.state.borrow().has_more_pages {
            return false;
        }
        match self.last_query.clone() {
            Some(query) => {
                let next = self.page.next();
                self.launch(&query, next);
                true
            }
            None => false,
        }
    }

    pub fn previous_page(&mut self) -> bool {
        match self.last_query.clone() {
            Some(query) if self.page.offset > 0 => {
                let previous = self.page.previous();
                self.launch(&query, previous);
                true
            }
            _ => false,
        }
    }

    /// Waits for the in-flight search, if any, to publish its final state.
    pub async fn wait_idle(&mut self) {
        if let Some(job) = self.job.take() {
            if let Err(e) = job.await {
                if !e.is_cancelled() {
                    tracing::error!("Search task failed: {}", e);
                }
            }
        }
    }

    fn cancel(&mut self) -> u64 {
        if let Some(job) = self.job.take() {
            job.abort();
        }
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn launch(&mut self, query: &str, page: PageRequest) {
        let generation = self.cancel();

        if query.trim().is_empty() {
            self.last_query = None;
            self.page = PageRequest::first(self.page.limit);
            self.state.send_replace(SearchViewState::default());
            return;
        }

        self.last_query = Some(query.to_string());
        self.page = page;

        let use_case = self.use_case.clone();
        let state = Arc::clone(&self.state);
        let current = Arc::clone(&self.generation);
        let query = query.to_string();

        self.job = Some(tokio::spawn(async move {
            let mut updates = use_case.invoke_paged(&query, page);
            while let Some(resource) = updates.next().await {
                let next = SearchViewState::from_resource(resource, page);
                state.send_if_modified(|view| {
                    if current.load(Ordering::SeqCst) != generation {
                        return false;
                    }
                    *view = next;
                    true
                });
            }
        }));
    }
}

impl Drop for SearchViewModel {
    fn drop(&mut self) {
        if let Some(job) = self.job.take() {
            job.abort();
        }
    }
}
