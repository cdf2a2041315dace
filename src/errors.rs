use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    RequestInvalid(String),

    #[error("Upstream model failure: {0}")]
    UpstreamFailure(String),

    #[error("Upstream model timed out: {0}")]
    UpstreamTimeout(String),

    #[error("Failed to decode model reply: {0}")]
    DecodeFailure(String),

    #[error("{0}")]
    AuthFailure(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::RequestInvalid(_) => "REQUEST_INVALID",
            AppError::UpstreamFailure(_) => "UPSTREAM_FAILURE",
            AppError::UpstreamTimeout(_) => "UPSTREAM_TIMEOUT",
            AppError::DecodeFailure(_) => "DECODE_FAILURE",
            AppError::AuthFailure(_) => "AUTH_FAILURE",
            AppError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::RequestInvalid(_) => StatusCode::BAD_REQUEST,
            AppError::AuthFailure(_) => StatusCode::UNAUTHORIZED,
            AppError::UpstreamFailure(_)
            | AppError::UpstreamTimeout(_)
            | AppError::DecodeFailure(_)
            | AppError::ConfigurationError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.error_code(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::RequestInvalid(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
