//! # Axum Helpers
//!
//! Shared plumbing for the catalog HTTP services.
//!
//! ## Modules
//!
//! - **[`errors`]**: `AppError`, problem-details bodies, the error translator
//!   middleware and panic recovery
//! - **[`extractors`]**: `ApiJson` and `IdPath` with problem-details rejections
//! - **[`http`]**: CORS and security headers
//! - **[`server`]**: router assembly with API docs, health endpoints,
//!   graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig, Environment};
//!
//! let router = create_router::<ApiDoc>(api_routes, &server, Environment::from_env())?
//!     .merge(health_router(app_info!()));
//! create_production_app(router, &server, Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ReadyResponse, ShutdownCoordinator, close_postgres,
    create_production_app, create_router, health_router, run_health_checks, shutdown_signal,
};

pub use http::{create_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorReport, FieldErrors, ProblemDetails, with_error_handling};

pub use extractors::{ApiJson, IdPath};
