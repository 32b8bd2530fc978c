use crate::domain::analytics::AnalyticsEvent;
use crate::domain::ports::AnalyticsSink;
use std::sync::{Arc, Mutex};

/// Reports events as structured log lines on the `analytics` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn log_event(&self, event: AnalyticsEvent) {
        let params = serde_json::to_string(&event.params).unwrap_or_default();
        tracing::info!(
            target: "analytics",
            event = %event.name,
            recorded_at = %event.recorded_at.to_rfc3339(),
            %params,
            "analytics event"
        );
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn log_event(&self, _event: AnalyticsEvent) {}
}

/// Keeps every event in memory so callers can inspect what was reported.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnalytics {
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

impl RecordingAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn event_names(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.name).collect()
    }
}

impl AnalyticsSink for RecordingAnalytics {
    fn log_event(&self, event: AnalyticsEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_keeps_order() {
        let sink = RecordingAnalytics::new();
        let shared = sink.clone();
        sink.log_event(AnalyticsEvent::search("arroz"));
        shared.log_event(AnalyticsEvent::custom("click_back_button"));

        assert_eq!(sink.event_names(), vec!["search", "click_back_button"]);
    }
}
