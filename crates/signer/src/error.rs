use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum SignerServerError {
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Trait implementation to convert this error into an axum http response
impl IntoResponse for SignerServerError {
    fn into_response(self) -> Response {
        match self {
            bad_request_error @ SignerServerError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, bad_request_error.to_string()).into_response()
            }
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something wrong happened.",
            )
                .into_response(),
        }
    }
}
