use tracing::{error, info};

/// Closes a sea-orm pool during shutdown, logging the outcome.
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(()) => info!("PostgreSQL pool '{}' closed", name),
        Err(e) => error!("Error closing PostgreSQL pool '{}': {}", name, e),
    }
}
