use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::commands::UpdateProductCommand;
use crate::error::{ProductError, ProductResult};
use crate::mediator::{Handler, ProductReply, ProductRequest, Request, RequestKind};
use crate::repository::ProductRepository;
use crate::validation::validate_command;

impl Request for UpdateProductCommand {
    const KIND: RequestKind = RequestKind::UpdateProduct;
    type Response = ();

    fn into_request(self) -> ProductRequest {
        ProductRequest::Update(self)
    }

    fn from_request(request: ProductRequest) -> Option<Self> {
        match request {
            ProductRequest::Update(command) => Some(command),
            _ => None,
        }
    }

    fn into_reply(_: ()) -> ProductReply {
        ProductReply::Completed
    }

    fn from_reply(reply: ProductReply) -> Option<()> {
        matches!(reply, ProductReply::Completed).then_some(())
    }
}

pub struct UpdateProductHandler<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> UpdateProductHandler<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ProductRepository> Handler for UpdateProductHandler<R> {
    type Request = UpdateProductCommand;

    /// Last write wins: there is no version check against concurrent updates.
    #[instrument(skip(self, command), fields(product_id = command.id))]
    async fn handle(&self, command: UpdateProductCommand) -> ProductResult<()> {
        validate_command(&command)?;

        let mut product = self
            .repository
            .get_by_id(command.id)
            .await?
            .ok_or(ProductError::NotFound(command.id))?;

        product.update_details(command.name, command.description, command.price)?;
        product.update_stock(command.stock_quantity)?;

        self.repository.update(product).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;

    fn stored(id: i32) -> Product {
        Product::from_storage(id, "Widget".into(), String::new(), Decimal::new(999, 2), 5)
    }

    fn command(id: i32) -> UpdateProductCommand {
        UpdateProductCommand {
            id,
            name: "Gadget".into(),
            description: "renamed".into(),
            price: Decimal::new(1250, 2),
            stock_quantity: 3,
        }
    }

    #[tokio::test]
    async fn test_update_applies_all_fields() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(6))
            .returning(|id| Ok(Some(stored(id))));
        mock_repo
            .expect_update()
            .withf(|p| {
                p.id() == 6
                    && p.name() == "Gadget"
                    && p.description() == "renamed"
                    && p.price() == Decimal::new(1250, 2)
                    && p.stock_quantity() == 3
            })
            .times(1)
            .returning(|_| Ok(()));

        let handler = UpdateProductHandler::new(Arc::new(mock_repo));
        handler.handle(command(6)).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));
        mock_repo.expect_update().never();

        let handler = UpdateProductHandler::new(Arc::new(mock_repo));
        let result = handler.handle(command(404)).await;

        assert!(matches!(result, Err(ProductError::NotFound(404))));
    }

    #[tokio::test]
    async fn test_validation_runs_before_lookup() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().never();
        mock_repo.expect_update().never();

        let handler = UpdateProductHandler::new(Arc::new(mock_repo));
        let result = handler
            .handle(UpdateProductCommand {
                stock_quantity: -1,
                ..command(6)
            })
            .await;

        match result {
            Err(ProductError::Validation(errors)) => {
                assert_eq!(
                    errors["StockQuantity"],
                    vec!["StockQuantity must not be negative."]
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
