use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

const RENDER_TIME_SECONDS: &[f64] = &[
    0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5,
];

pub fn setup_metrics_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("page_render_time".to_string()),
            RENDER_TIME_SECONDS,
        )?
        .install_recorder()
}

#[derive(Clone)]
pub struct Metrics {
    pub prometheus_handle: PrometheusHandle,
}

impl Metrics {
    pub fn new(prometheus_handle: PrometheusHandle) -> Self {
        Self { prometheus_handle }
    }

    pub fn render(&self) -> String {
        self.prometheus_handle.render()
    }
}

/// Counts a content document that loaded and parsed.
pub fn record_content_loaded() {
    metrics::increment_counter!("content_loads_total");
}

/// Counts a failed content load, labelled `fetch` or `parse`.
pub fn record_content_load_failed(kind: &'static str) {
    metrics::increment_counter!("content_load_failures_total", "kind" => kind);
}

pub fn record_render_time(duration: Duration) {
    metrics::histogram!("page_render_time", duration.as_secs_f64());
}
