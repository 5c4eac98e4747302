//! Axum router wiring.
//!
//! Every route, including unmatched ones, runs inside the request tracking
//! middleware so the counter sees all traffic.

use axum::{middleware, routing::get, routing::post, Router};

use crate::{app_state::AppState, http, obs, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::index::index))
        .route("/slow", get(http::index::slow))
        .route("/items", post(http::items::create_item))
        .route(
            "/items/:id",
            get(http::items::get_item)
                .put(http::items::update_item)
                .delete(http::items::delete_item),
        )
        .route("/metrics", get(ops::metrics))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .fallback(ops::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::middleware::track_requests,
        ))
        .with_state(state)
}
