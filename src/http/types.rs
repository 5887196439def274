use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::error::TodoError;

/// Wire shape of every error response: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody { pub error: String }

#[derive(Debug)]
pub struct ApiError { pub status: StatusCode, pub message: String }

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into() }
    }
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        let status = match err {
            TodoError::Validation | TodoError::Conflict => StatusCode::BAD_REQUEST,
            TodoError::UserNotFound | TodoError::TodoNotFound => StatusCode::NOT_FOUND,
        };
        Self { status, message: err.to_string() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status, message = %self.message, "request rejected");
        (self.status, axum::Json(ErrorBody { error: self.message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_statuses() {
        let cases = [
            (TodoError::Validation, StatusCode::BAD_REQUEST, "Parameters name and username is required!"),
            (TodoError::Conflict, StatusCode::BAD_REQUEST, "User already exists."),
            (TodoError::UserNotFound, StatusCode::NOT_FOUND, "User does not exist."),
            (TodoError::TodoNotFound, StatusCode::NOT_FOUND, "Todo does not exist."),
        ];
        for (err, status, message) in cases {
            let api = ApiError::from(err);
            assert_eq!(api.status, status);
            assert_eq!(api.message, message);
        }
    }
}
