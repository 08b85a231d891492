use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Validation(BTreeMap<String, String>),
    InternalServerError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    fn message(msg: &str) -> Self {
        ErrorResponse {
            error: msg.to_string(),
            fields: None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::Validation(fields) => {
                let details = fields
                    .iter()
                    .map(|(field, msg)| format!("{}: {}", field, msg))
                    .collect::<Vec<_>>()
                    .join("; ");
                write!(f, "Validation failed: {}", details)
            }
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(msg) => HttpResponse::NotFound().json(ErrorResponse::message(msg)),
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(ErrorResponse::message(msg)),
            AppError::Validation(fields) => HttpResponse::BadRequest().json(ErrorResponse {
                error: "Validation failed".to_string(),
                fields: Some(fields.clone()),
            }),
            AppError::InternalServerError(msg) => {
                HttpResponse::InternalServerError().json(ErrorResponse::message(msg))
            }
        }
    }
}
