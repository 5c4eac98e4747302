//! Observability: Prometheus metrics, request tracking, and structured logging.
//!
//! Everything here is owned by `AppState`; nothing registers into a global
//! registry or logger handle besides the one-time subscriber install in `main`.

pub mod logging;
pub mod metrics;
pub mod middleware;
