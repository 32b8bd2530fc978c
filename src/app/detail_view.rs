use crate::core::usecase::GetProductDetailUseCase;
use crate::domain::analytics::AnalyticsEvent;
use crate::domain::model::ProductDetail;
use crate::domain::ports::AnalyticsSink;
use crate::domain::resource::Resource;
use futures_util::StreamExt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDetailViewState {
    pub is_loading: bool,
    pub product_detail: Option<ProductDetail>,
    pub error_message: Option<String>,
}

impl ProductDetailViewState {
    fn from_resource(resource: Resource<ProductDetail>) -> Self {
        match resource {
            Resource::Loading => Self {
                is_loading: true,
                ..Self::default()
            },
            Resource::Success(detail) => Self {
                product_detail: Some(detail),
                ..Self::default()
            },
            Resource::Error(message) => Self {
                error_message: Some(message),
                ..Self::default()
            },
        }
    }
}

/// Holds the product detail screen state. Successful loads are reported to
/// analytics as `view_item`.
pub struct ProductDetailViewModel {
    use_case: GetProductDetailUseCase,
    analytics: Arc<dyn AnalyticsSink>,
    state: Arc<watch::Sender<ProductDetailViewState>>,
    generation: Arc<AtomicU64>,
    job: Option<JoinHandle<()>>,
}

impl ProductDetailViewModel {
    pub fn new(use_case: GetProductDetailUseCase, analytics: Arc<dyn AnalyticsSink>) -> Self {
        let (state, _) = watch::channel(ProductDetailViewState::default());
        Self {
            use_case,
            analytics,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            job: None,
        }
    }

    pub fn view_state(&self) -> watch::Receiver<ProductDetailViewState> {
        self.state.subscribe()
    }

    pub fn current_state(&self) -> ProductDetailViewState {
        self.state.borrow().clone()
    }

    pub fn load_product_detail(&mut self, product_id: &str) {
        let generation = self.cancel();

        let use_case = self.use_case.clone();
        let analytics = Arc::clone(&self.analytics);
        let state = Arc::clone(&self.state);
        let current = Arc::clone(&self.generation);
        let product_id = product_id.to_string();

        self.job = Some(tokio::spawn(async move {
            let mut updates = use_case.invoke(&product_id);
            while let Some(resource) = updates.next().await {
                let viewed = resource.data().map(|detail| {
                    AnalyticsEvent::view_item(
                        &detail.id,
                        &detail.title,
                        Some(detail.category_id.as_str()).filter(|c| !c.is_empty()),
                        Some(detail.price),
                        Some(detail.currency_id.as_str()).filter(|c| !c.is_empty()),
                    )
                });

                let next = ProductDetailViewState::from_resource(resource);
                let published = state.send_if_modified(|view| {
                    if current.load(Ordering::SeqCst) != generation {
                        return false;
                    }
                    *view = next;
                    true
                });

                if let (true, Some(event)) = (published, viewed) {
                    analytics.log_event(event);
                }
            }
        }));
    }

    pub fn clear_product_detail(&mut self) {
        self.cancel();
        self.state.send_replace(ProductDetailViewState::default());
    }

    pub async fn wait_idle(&mut self) {
        if let Some(job) = self.job.take() {
            if let Err(e) = job.await {
                if !e.is_cancelled() {
                    tracing::error!("Product detail task failed: {}", e);
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
}

impl Drop for ProductDetailViewModel {
    fn drop(&mut self) {
        if let Some(job) = self.job.take() {
            job.abort();
        }
    }
}
