use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::validation::BookingRejection;

#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    Forbidden(String),
    BadRequest(String),
    NotFound(String),
    /// A validation verdict, not a transport failure. Mapped to 422 so the
    /// client can tell the two apart and show the reason verbatim.
    Validation(BookingRejection),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg).into_response(),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg).into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::Validation(rejection) => {
                (StatusCode::UNPROCESSABLE_ENTITY, rejection.to_string()).into_response()
            }
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}

impl From<BookingRejection> for ApiError {
    fn from(value: BookingRejection) -> Self {
        ApiError::Validation(value)
    }
}
