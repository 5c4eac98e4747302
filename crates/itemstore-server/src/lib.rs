//! itemstore server library entry.
//!
//! Wires config, the key-value backend, observability, and the HTTP handlers
//! into an axum application. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod http;
pub mod infra;
pub mod obs;
pub mod ops;
pub mod router;
