//! Root, slow, metrics, and probe endpoints.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::StatusCode;
use serde_json::json;

use itemstore_core::MemoryBackend;
use itemstore_server::config::RouteLabel;

use common::{test_config, TestServer};

/// Value of the first sample line `name{..} v` / `name v` matching `prefix`.
fn sample_sum(body: &str, prefix: &str) -> f64 {
    body.lines()
        .filter(|l| l.starts_with(prefix))
        .filter_map(|l| l.rsplit(' ').next())
        .map(|v| v.parse::<f64>().unwrap())
        .sum()
}

#[tokio::test]
async fn index_greets() {
    let (srv, _) = TestServer::spawn().await;
    let r = srv.get("/").await;
    assert_eq!(r.status(), StatusCode::OK);
    assert_eq!(r.text().await.unwrap(), "Hello World!");
}

#[tokio::test]
async fn slow_waits_then_succeeds() {
    let (srv, _) = TestServer::spawn().await;

    let started = Instant::now();
    let r = srv.get("/slow").await;
    assert!(started.elapsed() >= Duration::from_millis(50));
    assert_eq!(r.status(), StatusCode::OK);
    let body: serde_json::Value = r.json().await.unwrap();
    assert_eq!(body, json!({"status": "Success", "message": "Heavy task"}));
}

#[tokio::test]
async fn metrics_count_completed_requests() {
    let (srv, _) = TestServer::spawn().await;

    srv.get("/").await;
    srv.post_json("/items", json!({"id": "m", "name": "x"})).await;
    srv.get("/items/m").await;
    srv.get("/items/other").await;

    let r = srv.get("/metrics").await;
    assert_eq!(r.status(), StatusCode::OK);
    let ct = r.headers()["content-type"].to_str().unwrap().to_owned();
    assert!(ct.starts_with("text/plain"), "content-type={ct}");

    let body = r.text().await.unwrap();
    assert!(sample_sum(&body, "total_req ") >= 4.0, "{body}");
    assert!(sample_sum(&body, "http_express_req_res_time_count") >= 4.0, "{body}");

    // both ids collapse into one route label
    assert!(body.contains(r#"route="/items/:id",status_code="200""#), "{body}");
    assert!(body.contains(r#"route="/items/:id",status_code="404""#), "{body}");
    assert!(!body.contains(r#"route="/items/m""#), "{body}");
    assert!(body.contains(r#"method="POST",route="/items",status_code="201""#), "{body}");

    assert_eq!(srv.state.metrics().total_requests(), 5);
}

#[tokio::test]
async fn unmatched_routes_are_counted() {
    let (srv, _) = TestServer::spawn().await;
    assert_eq!(srv.get("/no/such/route").await.status(), StatusCode::NOT_FOUND);

    let body = srv.get("/metrics").await.text().await.unwrap();
    assert!(body.contains(r#"route="unmatched",status_code="404""#), "{body}");
    assert!(sample_sum(&body, "total_req ") >= 1.0);
}

#[tokio::test]
async fn raw_route_labels_use_request_path() {
    let mut cfg = test_config();
    cfg.metrics.route_label = RouteLabel::Raw;
    let srv = TestServer::spawn_with(cfg, Arc::new(MemoryBackend::new())).await;

    srv.get("/items/abc").await;
    let body = srv.get("/metrics").await.text().await.unwrap();
    assert!(body.contains(r#"route="/items/abc""#), "{body}");
}

#[tokio::test]
async fn probes_follow_draining() {
    let (srv, _) = TestServer::spawn().await;

    let r = srv.get("/healthz").await;
    assert_eq!(r.status(), StatusCode::OK);
    assert_eq!(srv.get("/readyz").await.status(), StatusCode::OK);

    srv.state.set_draining();
    let r = srv.get("/readyz").await;
    assert_eq!(r.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(r.text().await.unwrap(), "draining");
    assert_eq!(srv.get("/healthz").await.status(), StatusCode::OK);
}
