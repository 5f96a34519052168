//! Last stop for every failed request.
//!
//! Handlers return [`AppError`]; its `IntoResponse` impl renders the problem
//! body and leaves an [`ErrorReport`] in the response extensions. The
//! [`error_translator`] middleware picks the report up, logs it at a level
//! that matches the status and, in production, swaps server-side details for
//! a generic message.

use super::{AppError, ErrorReport, ProblemDetails};
use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use core_config::Environment;
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::{error, info, warn};

pub const GENERIC_SERVER_ERROR: &str = "An unexpected error occurred on the server.";

pub async fn error_translator(
    State(environment): State<Environment>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let mut response = next.run(request).await;

    let Some(report) = response.extensions_mut().remove::<ErrorReport>() else {
        return response;
    };

    let status = response.status();
    if status.is_server_error() {
        error!(
            %method,
            %path,
            status = status.as_u16(),
            error_code = report.code.code(),
            error = %report.message,
            "Request failed"
        );

        if environment.is_production() {
            return ProblemDetails::new(status, report.code.title())
                .with_detail(GENERIC_SERVER_ERROR)
                .into_response();
        }
    } else if status.is_client_error() {
        warn!(
            %method,
            %path,
            status = status.as_u16(),
            error_code = report.code.code(),
            error = %report.message,
            "Request rejected"
        );
    } else {
        info!(error_code = report.code.code(), error = %report.message, "Error report on non-error status");
    }

    response
}

/// Converts a handler panic into a 500 problem response.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(format!("handler panicked: {}", message)).into_response()
}

/// Wraps `router` with panic recovery and the error translator.
pub fn with_error_handling(router: Router, environment: Environment) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn_with_state(environment, error_translator))
}
