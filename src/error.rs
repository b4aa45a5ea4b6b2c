use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

/// Application-level error type
#[derive(Debug)]
pub enum AppError {
    /// Request failed validation (missing or malformed fields)
    Validation(String),
    /// Resource not found
    NotFound(String),
    /// An upstream provider failed and no cached fallback existed
    Upstream(String),
}

/// Error envelope returned to the frontend:
/// `{success: false, error, message}`
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    message: String,
}

impl AppError {
    fn error_summary(&self) -> &str {
        match self {
            Self::Validation(_) => "Invalid request",
            Self::NotFound(_) => "Not found",
            Self::Upstream(_) => "Failed to fetch upstream data",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Upstream(msg) => write!(f, "Upstream error: {msg}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = ErrorResponse {
            success: false,
            error: self.error_summary().to_string(),
            message: self.to_string(),
        };

        match self {
            Self::Validation(_) => HttpResponse::BadRequest().json(body),
            Self::NotFound(_) => HttpResponse::NotFound().json(body),
            Self::Upstream(_) => HttpResponse::InternalServerError().json(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn variants_map_to_expected_status_codes() {
        let cases = [
            (AppError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (AppError::NotFound("gone".into()), StatusCode::NOT_FOUND),
            (
                AppError::Upstream("down".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.error_response().status(), expected);
        }
    }

    #[test]
    fn summary_and_display_feed_the_failure_envelope() {
        let error = AppError::Upstream("GitHub down".into());
        assert_eq!(error.error_summary(), "Failed to fetch upstream data");
        assert_eq!(error.to_string(), "Upstream error: GitHub down");
    }
}
