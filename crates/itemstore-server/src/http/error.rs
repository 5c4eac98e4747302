//! Error → HTTP response mapping for item endpoints.
//!
//! Bodies are fixed plain-text strings per operation; backend detail is logged
//! but never sent to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use itemstore_core::{ClientCode, ItemStoreError};

/// Item operation that produced an error; selects the response text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOp {
    Create,
    Fetch,
    Update,
    Delete,
}

impl ItemOp {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemOp::Create => "create",
            ItemOp::Fetch => "fetch",
            ItemOp::Update => "update",
            ItemOp::Delete => "delete",
        }
    }

    fn invalid_message(self) -> &'static str {
        match self {
            ItemOp::Create => "ID and Name are required",
            ItemOp::Update => "Name is required",
            ItemOp::Fetch | ItemOp::Delete => "Bad request",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            ItemOp::Create => "Error creating item",
            ItemOp::Fetch => "Error fetching item",
            ItemOp::Update => "Error updating item",
            ItemOp::Delete => "Error deleting item",
        }
    }
}

#[derive(Debug)]
pub struct ApiError {
    op: ItemOp,
    source: ItemStoreError,
}

impl ApiError {
    pub fn new(op: ItemOp, source: ItemStoreError) -> Self {
        Self { op, source }
    }

    /// `map_err` adapter: `.map_err(ApiError::on(ItemOp::Fetch))`.
    pub fn on(op: ItemOp) -> impl Fn(ItemStoreError) -> Self {
        move |source| Self::new(op, source)
    }

    pub fn status(&self) -> StatusCode {
        match self.source.client_code() {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self.source.client_code() {
            ClientCode::BadRequest => self.op.invalid_message(),
            ClientCode::NotFound => "Item not found",
            ClientCode::Internal => self.op.failure_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.source.client_code() == ClientCode::Internal {
            tracing::warn!(op = self.op.as_str(), error = %self.source, "item operation failed");
        }
        (self.status(), self.message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_follow_operation() {
        let e = ApiError::new(ItemOp::Update, ItemStoreError::Validation("name".into()));
        assert_eq!(e.status(), StatusCode::BAD_REQUEST);
        assert_eq!(e.message(), "Name is required");

        let e = ApiError::new(ItemOp::Delete, ItemStoreError::Backend("down".into()));
        assert_eq!(e.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message(), "Error deleting item");

        let e = ApiError::new(ItemOp::Fetch, ItemStoreError::NotFound);
        assert_eq!(e.status(), StatusCode::NOT_FOUND);
        assert_eq!(e.message(), "Item not found");
    }
}
