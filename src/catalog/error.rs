use super::types::MessageResponse;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Rejections of a create payload. The display text is sent to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    MissingName,
    #[error("Price must be a non-negative number")]
    InvalidPrice,
    #[error("Invalid JSON body")]
    InvalidBody,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// `message` is the static text returned to the client; `source` is only
    /// logged.
    #[error("{message}")]
    Storage {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl CatalogError {
    pub fn storage(message: &'static str, source: anyhow::Error) -> Self {
        Self::Storage { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation(e) => tracing::debug!("Rejected plant payload: {}", e),
            Self::Storage { message, source } => {
                tracing::error!("{}: {:?}", message, source)
            }
        }

        let body = MessageResponse {
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
