//! Item request body extractor.
//!
//! Accepts JSON and urlencoded form bodies. Anything unparseable (bad JSON,
//! wrong field types, other content types, no body) becomes an empty
//! payload, which then fails validation with 400 instead of a framework
//! rejection.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};

use itemstore_core::ItemPayload;

#[derive(Debug)]
pub struct ItemBody(pub ItemPayload);

#[async_trait]
impl<S> FromRequest<S> for ItemBody
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let payload = if content_type.starts_with("application/json") {
            match Json::<ItemPayload>::from_request(req, state).await {
                Ok(Json(p)) => p,
                Err(rejection) => {
                    tracing::debug!(%rejection, "unparseable json item body");
                    ItemPayload::default()
                }
            }
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            match Form::<ItemPayload>::from_request(req, state).await {
                Ok(Form(p)) => p,
                Err(rejection) => {
                    tracing::debug!(%rejection, "unparseable form item body");
                    ItemPayload::default()
                }
            }
        } else {
            ItemPayload::default()
        };

        Ok(Self(payload))
    }
}
