//! Request tracking middleware: times the whole handling of every request and
//! feeds [`HttpMetrics`](super::metrics::HttpMetrics).

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;
use crate::config::RouteLabel;
use crate::obs::metrics::UNMATCHED_ROUTE;

pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let route = route_of(state.metrics().route_label(), &req);

    let response = next.run(req).await;

    state.metrics().observe(
        method.as_str(),
        &route,
        response.status().as_str(),
        started.elapsed(),
    );
    response
}

fn route_of(mode: RouteLabel, req: &Request) -> String {
    match mode {
        RouteLabel::Raw => req.uri().path().to_owned(),
        RouteLabel::Matched => req
            .extensions()
            .get::<MatchedPath>()
            .map_or_else(|| UNMATCHED_ROUTE.to_owned(), |p| p.as_str().to_owned()),
    }
}
