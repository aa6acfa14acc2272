use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use assessment_bank::BankError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Assessment bank error: {0}")]
    Bank(#[from] BankError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Bank(BankError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Bank(BankError::InvalidRequest { .. }) | AppError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Bank(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.error_type().to_string(),
            message: self.to_string(),
        })
    }
}

impl AppError {
    fn error_type(&self) -> &'static str {
        match self {
            AppError::Bank(BankError::NotFound { .. }) => "project_not_found",
            AppError::Bank(BankError::InvalidRequest { .. }) | AppError::InvalidRequest(_) => {
                "invalid_request"
            }
            AppError::Bank(_) => "bank_error",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
