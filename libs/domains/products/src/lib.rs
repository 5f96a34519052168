//! Products Domain
//!
//! CRUD over the product catalog, routed through a mediator.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, id checks, status codes
//! └──────┬──────┘
//!        │ ProductRequest
//! ┌──────▼──────┐
//! │  Mediator   │  ← One handler per RequestKind, resolved at startup
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Use cases  │  ← Validation, entity rules, mapping to ProductDto
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + Postgres / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product aggregate, DTO
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, product_mediator, InMemoryProductRepository};
//! use std::sync::Arc;
//!
//! let repository = Arc::new(InMemoryProductRepository::new());
//! let mediator = product_mediator(repository).expect("every request kind has a handler");
//!
//! let router = handlers::router(mediator);
//! ```

pub mod commands;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod mediator;
pub mod models;
pub mod postgres;
pub mod queries;
pub mod repository;
pub mod use_cases;
pub mod validation;

// Re-export commonly used types
pub use commands::{CreateProductCommand, DeleteProductCommand, UpdateProductCommand};
pub use error::{ProductError, ProductResult};
pub use mediator::{
    Handler, Mediator, MediatorBuilder, ProductReply, ProductRequest, Request, RequestKind,
    product_mediator,
};
pub use models::{Product, ProductDto};
pub use postgres::PgProductRepository;
pub use queries::{GetAllProductsQuery, GetProductByIdQuery};
pub use repository::{InMemoryProductRepository, ProductRepository};
