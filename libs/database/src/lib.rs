//! PostgreSQL plumbing shared by the catalog services.
//!
//! - [`postgres`]: pool configuration, connecting (optionally with retry),
//!   running a [`sea_orm_migration::MigratorTrait`] and health probes.
//! - [`common`]: the crate error type and the backoff helper.
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use core_config::FromEnv;
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config_with_retry(PostgresConfig::from_env()?, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "catalog_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
