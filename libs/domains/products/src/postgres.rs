use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};
use tracing::instrument;

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::Product,
    repository::ProductRepository,
};

/// PostgreSQL-backed repository over the `products` table.
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Product::from))
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self, product), fields(product_name = %product.name()))]
    async fn add(&self, product: Product) -> ProductResult<Product> {
        let model = entity::ActiveModel::for_insert(&product)
            .insert(&self.db)
            .await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    #[instrument(skip(self, product), fields(product_id = product.id()))]
    async fn update(&self, product: Product) -> ProductResult<()> {
        if !product.is_persisted() {
            return Err(ProductError::Storage(
                "cannot update a product without an id".to_string(),
            ));
        }

        entity::ActiveModel::for_update(&product)
            .update(&self.db)
            .await?;

        tracing::info!("Updated product");
        Ok(())
    }

    #[instrument(skip(self, product), fields(product_id = product.id()))]
    async fn delete(&self, product: Product) -> ProductResult<()> {
        let result = entity::Entity::delete_by_id(product.id())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ProductError::Storage(format!(
                "no stored product with id {}",
                product.id()
            )));
        }

        tracing::info!("Deleted product");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn model(id: i32, name: &str) -> entity::Model {
        entity::Model {
            id,
            name: name.to_string(),
            description: String::new(),
            price: Decimal::new(999, 2),
            stock_quantity: 5,
        }
    }

    #[tokio::test]
    async fn test_get_by_id_rehydrates_product() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(3, "Widget")]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let product = repo.get_by_id(3).await.unwrap().unwrap();
        assert_eq!(product.id(), 3);
        assert_eq!(product.name(), "Widget");
        assert_eq!(product.price(), Decimal::new(999, 2));
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_all_maps_every_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "a"), model(2, "b")]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let names: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_add_returns_assigned_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(11, "Widget")]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let product = Product::new("Widget", "", Decimal::new(999, 2), 5).unwrap();
        let saved = repo.add(product).await.unwrap();
        assert_eq!(saved.id(), 11);
    }

    #[tokio::test]
    async fn test_storage_failure_maps_to_storage_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let result = repo.get_all().await;
        assert!(matches!(result, Err(ProductError::Storage(msg)) if msg.contains("connection reset")));
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_storage_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let ghost = Product::from_storage(8, "Ghost".into(), String::new(), Decimal::ONE, 0);
        assert!(matches!(repo.delete(ghost).await, Err(ProductError::Storage(_))));
    }

    #[tokio::test]
    async fn test_delete_existing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let product = Product::from_storage(8, "Widget".into(), String::new(), Decimal::ONE, 0);
        repo.delete(product).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_without_id_is_rejected_before_io() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = PgProductRepository::new(db);

        let product = Product::new("Widget", "", Decimal::ONE, 0).unwrap();
        assert!(matches!(repo.update(product).await, Err(ProductError::Storage(_))));
    }
}
