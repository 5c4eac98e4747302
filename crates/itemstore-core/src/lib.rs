//! itemstore core: transport-agnostic item model, error types, and the
//! key-value backend capability.
//!
//! This crate defines the contracts shared by the HTTP server and its tests.
//! It carries no HTTP or network client dependencies so the CRUD semantics can
//! be exercised against the in-memory backend alone.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every fallible path surfaces as `ItemStoreError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod backend;
pub mod error;
pub mod item;
pub mod service;

/// Shared result type.
pub use error::{ClientCode, ItemStoreError, Result};
pub use backend::{ItemBackend, MemoryBackend};
pub use item::{Item, ItemPayload};
pub use service::ItemService;
