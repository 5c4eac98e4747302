//! HTTP handlers and request/response plumbing.
//!
//! Handlers do request/response mapping only; CRUD semantics live in
//! `itemstore_core::ItemService`.

pub mod body;
pub mod error;
pub mod index;
pub mod items;

pub use body::ItemBody;
pub use error::{ApiError, ItemOp};
