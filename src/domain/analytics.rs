use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub const EVENT_SCREEN_VIEW: &str = "screen_view";
pub const EVENT_SEARCH: &str = "search";
pub const EVENT_VIEW_ITEM: &str = "view_item";

/// One interaction or screen view reported to the analytics backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub params: BTreeMap<String, Value>,
    pub recorded_at: DateTime<Utc>,
}

impl AnalyticsEvent {
    pub fn custom(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: BTreeMap::new(),
            recorded_at: Utc::now(),
        }
    }

    pub fn with_param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn screen_view(screen_name: &str, screen_class: &str) -> Self {
        Self::custom(EVENT_SCREEN_VIEW)
            .with_param("screen_name", screen_name)
            .with_param("screen_class", screen_class)
    }

    pub fn search(term: &str) -> Self {
        Self::custom(EVENT_SEARCH).with_param("search_term", term)
    }

    pub fn view_item(
        item_id: &str,
        item_name: &str,
        item_category: Option<&str>,
        price: Option<f64>,
        currency: Option<&str>,
    ) -> Self {
        let mut event = Self::custom(EVENT_VIEW_ITEM)
            .with_param("item_id", item_id)
            .with_param("item_name", item_name);
        if let Some(category) = item_category {
            event = event.with_param("item_category", category);
        }
        if let Some(price) = price {
            event = event.with_param("price", price);
        }
        if let Some(currency) = currency {
            event = event.with_param("currency", currency);
        }
        event
    }

    pub fn param_str(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(|v| v.as_str())
    }
}
