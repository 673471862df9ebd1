//! Error handling - maps domain failures to HTTP responses.
//!
//! Not-found and wrong-password outcomes answer with an empty body; other
//! failures use RFC 7807 problem details.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use board_core::DomainError;
use board_shared::ErrorResponse;
use std::fmt;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized,
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(detail) => {
                tracing::debug!("{}", detail);
                HttpResponse::build(self.status_code()).finish()
            }
            AppError::Unauthorized => HttpResponse::build(self.status_code()).finish(),
            AppError::BadRequest(detail) => {
                HttpResponse::build(self.status_code()).json(ErrorResponse::bad_request(detail))
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                HttpResponse::build(self.status_code()).json(ErrorResponse::internal_error())
            }
        }
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::IncorrectPassword => AppError::Unauthorized,
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// JSON extractor configuration reporting malformed bodies as problem details.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
