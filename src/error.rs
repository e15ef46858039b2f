//! Catalog error type and its HTTP mapping

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Errors surfaced by catalog operations.
///
/// Every variant maps onto a JSON `{ "error": ... }` response, so a handler
/// returning `Result<_, CatalogError>` always answers the request.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A required song field was missing or blank
    #[error("{0}")]
    Validation(String),

    /// Nothing matched the id or filter; holds the entity name
    #[error("{0} Not Found")]
    NotFound(&'static str),

    /// The backing store failed
    #[error("{0}")]
    Store(#[from] sqlx::Error),
}

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let CatalogError::Store(e) = self {
            tracing::error!("Store failure: {}", e);
        }

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}
