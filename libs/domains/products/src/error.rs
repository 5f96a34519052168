use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, FieldErrors};
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    /// Request-level rule violations, grouped by property name
    #[error("Validation failed for {}", field_list(.0))]
    Validation(FieldErrors),

    /// An entity invariant rejected a value
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument { field: &'static str, message: String },

    #[error("Product with id {0} was not found")]
    NotFound(i32),

    #[error("Route id {path} does not match body id {body}")]
    IdMismatch { path: i32, body: i32 },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

fn field_list(errors: &FieldErrors) -> String {
    errors.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
}

impl ProductError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        ProductError::InvalidArgument {
            field,
            message: message.into(),
        }
    }
}

impl From<DbErr> for ProductError {
    fn from(err: DbErr) -> Self {
        ProductError::Storage(err.to_string())
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Validation(errors) => AppError::Validation(errors),
            ProductError::InvalidArgument { message, .. } => AppError::InvalidArgument(message),
            err @ ProductError::NotFound(_) => AppError::NotFound(err.to_string()),
            err @ ProductError::IdMismatch { .. } => AppError::BadRequest(err.to_string()),
            ProductError::Storage(msg) => AppError::Database(msg),
            err @ ProductError::Configuration(_) => AppError::Internal(err.to_string()),
            ProductError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
