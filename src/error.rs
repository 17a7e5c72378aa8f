use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use derive_more::Display;
use serde_json::json;

/// Request-level error taxonomy. Every variant renders as a
/// `{"message": "..."}` body with the mapped status code.
#[derive(Debug, Display)]
pub enum ApiError {
    /// Malformed input: bad email format, future date, inverted range.
    #[display(fmt = "{}", _0)]
    BadRequest(String),

    /// Duplicate business id, email, or attendance key. The endpoint
    /// contract answers 400 for these, same as the other rejections.
    #[display(fmt = "{}", _0)]
    Conflict(String),

    /// Unknown employee reference.
    #[display(fmt = "{}", _0)]
    NotFound(String),

    /// Any other storage failure. Logged where it happens; the caller
    /// only sees an opaque message.
    #[display(fmt = "Internal Server Error")]
    Database(sqlx::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "message": self.to_string() }))
    }
}
