pub mod codes;
pub mod handlers;
pub mod responses;
pub mod translator;

pub use codes::ErrorCode;
pub use translator::{error_translator, panic_response, with_error_handling};

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use utoipa::ToSchema;

pub const PROBLEM_JSON: &str = "application/problem+json";

/// Validation messages grouped by property name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// RFC 7807 style error body.
///
/// ```json
/// {
///   "title": "Validation Error",
///   "status": 400,
///   "errors": { "Name": ["Name is required."] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProblemDetails {
    pub title: String,
    pub status: u16,
    /// Present for validation failures only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ProblemDetails {
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: status.as_u16(),
            errors: None,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = Some(errors);
        self
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            [(header::CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON))],
            Json(self),
        )
            .into_response()
    }
}

/// Full error description stored in the response extensions.
///
/// The [`error_translator`] middleware takes it out, logs it and decides how
/// much of it the client may see.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Validation failed: {0:?}")]
    Validation(FieldErrors),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid JSON body: {0}")]
    JsonRejection(#[from] JsonRejection),

    #[error("Invalid path parameter: {0}")]
    PathRejection(#[from] PathRejection),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::InvalidArgument(_)
            | AppError::BadRequest(_)
            | AppError::JsonRejection(_)
            | AppError::PathRejection(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) => ErrorCode::ValidationError,
            AppError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::JsonRejection(_) => ErrorCode::InvalidJson,
            AppError::PathRejection(_) => ErrorCode::InvalidPath,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }

    pub fn to_problem(&self) -> ProblemDetails {
        let code = self.code();
        let problem = ProblemDetails::new(self.status(), code.title());

        match self {
            AppError::Validation(errors) => problem.with_errors(errors.clone()),
            AppError::InvalidArgument(msg)
            | AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::Database(msg)
            | AppError::Internal(msg) => problem.with_detail(msg.clone()),
            AppError::JsonRejection(e) => problem.with_detail(e.body_text()),
            AppError::PathRejection(e) => problem.with_detail(e.body_text()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let report = ErrorReport {
            code: self.code(),
            message: self.to_string(),
        };

        let mut response = self.to_problem().into_response();
        response.extensions_mut().insert(report);
        response
    }
}
