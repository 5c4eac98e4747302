//! Prometheus metrics for the HTTP surface.
//!
//! Two instruments share one registry:
//! - `total_req`: every completed request, unconditionally.
//! - `http_express_req_res_time`: request latency in milliseconds labelled by
//!   `method`, `route`, `status_code`.
//!
//! The metric names are kept stable for existing dashboards.

use std::time::Duration;

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounter, Registry, TextEncoder};

use itemstore_core::error::{ItemStoreError, Result};

use crate::config::{MetricsSection, RouteLabel};

pub const TOTAL_REQUESTS: &str = "total_req";
pub const RESPONSE_TIME: &str = "http_express_req_res_time";

/// Fixed latency buckets in milliseconds.
pub const RESPONSE_TIME_BUCKETS_MS: [f64; 9] =
    [1.0, 50.0, 100.0, 200.0, 400.0, 500.0, 800.0, 1000.0, 2000.0];

/// Route label for requests no route matched.
pub const UNMATCHED_ROUTE: &str = "unmatched";

pub struct HttpMetrics {
    registry: Registry,
    total_requests: IntCounter,
    response_time: HistogramVec,
    route_label: RouteLabel,
}

impl HttpMetrics {
    /// Build the registry first, then the instruments, then register them.
    pub fn new(cfg: &MetricsSection) -> Result<Self> {
        let registry = Registry::new();

        let total_requests = IntCounter::new(TOTAL_REQUESTS, "Total HTTP requests served")
            .map_err(metrics_error)?;
        let response_time = HistogramVec::new(
            HistogramOpts::new(RESPONSE_TIME, "HTTP request handling time in milliseconds")
                .buckets(RESPONSE_TIME_BUCKETS_MS.to_vec()),
            &["method", "route", "status_code"],
        )
        .map_err(metrics_error)?;

        registry
            .register(Box::new(total_requests.clone()))
            .map_err(metrics_error)?;
        registry
            .register(Box::new(response_time.clone()))
            .map_err(metrics_error)?;

        if cfg.process {
            register_process_collector(&registry)?;
        }

        Ok(Self {
            registry,
            total_requests,
            response_time,
            route_label: cfg.route_label,
        })
    }

    pub fn route_label(&self) -> RouteLabel {
        self.route_label
    }

    /// Record one completed request.
    pub fn observe(&self, method: &str, route: &str, status: &str, elapsed: Duration) {
        self.total_requests.inc();
        self.response_time
            .with_label_values(&[method, route, status])
            .observe(elapsed.as_secs_f64() * 1000.0);
    }

    pub fn total_requests(&self) -> u64 {
        self.total_requests.get()
    }

    /// Content type declared by the text encoder.
    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }

    /// Encode the whole registry in the text exposition format.
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let families = self.registry.gather();
        let mut buf = Vec::new();
        encoder.encode(&families, &mut buf).map_err(metrics_error)?;
        String::from_utf8(buf).map_err(|e| ItemStoreError::Internal(format!("metrics utf8: {e}")))
    }
}

#[cfg(target_os = "linux")]
fn register_process_collector(registry: &Registry) -> Result<()> {
    let pc = prometheus::process_collector::ProcessCollector::for_self();
    registry.register(Box::new(pc)).map_err(metrics_error)
}

#[cfg(not(target_os = "linux"))]
fn register_process_collector(_registry: &Registry) -> Result<()> {
    tracing::debug!("process metrics are only collected on linux");
    Ok(())
}

fn metrics_error(e: prometheus::Error) -> ItemStoreError {
    ItemStoreError::Internal(format!("metrics: {e}"))
}
