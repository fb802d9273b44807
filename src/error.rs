use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Error taxonomy for the HTTP surface.
///
/// Every failure a handler can produce maps onto the `{result:"NG"}`
/// envelope; 4xx responses carry `message`, 5xx responses carry `error` with
/// the internal detail logged rather than leaked.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing required field, or an attempt to mutate the immutable
    /// business-id field.
    #[error("{0}")]
    Validation(String),

    /// Mutation attempted without the concurrency token.
    #[error("LastUpdate field is required in the request body")]
    PreconditionMissing,

    /// Supplied concurrency token does not match the stored one.
    #[error("Provided lastUpdate does not match actual lastUpdate")]
    PreconditionMismatch,

    /// Business id absent from its collection, or unknown resource segment.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The ID allocator spent its retry budget.
    #[error("Max attempts reached")]
    AllocationExhausted,

    /// Any underlying store/I-O failure.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Validation(_)
            | ApiError::PreconditionMissing
            | ApiError::PreconditionMismatch => (
                StatusCode::BAD_REQUEST,
                json!({ "result": "NG", "message": self.to_string() }),
            ),
            ApiError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                json!({ "result": "NG", "message": self.to_string() }),
            ),
            ApiError::AllocationExhausted => {
                log::error!("id allocation retry budget spent");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "result": "NG", "error": "Max attempts reached" }),
                )
            }
            ApiError::Store(err) => {
                log::error!("store error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "result": "NG", "error": "Internal Server Error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
