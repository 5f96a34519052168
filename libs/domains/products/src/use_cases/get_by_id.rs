use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductResult;
use crate::mediator::{Handler, ProductReply, ProductRequest, Request, RequestKind};
use crate::models::ProductDto;
use crate::queries::GetProductByIdQuery;
use crate::repository::ProductRepository;

impl Request for GetProductByIdQuery {
    const KIND: RequestKind = RequestKind::GetProductById;
    type Response = Option<ProductDto>;

    fn into_request(self) -> ProductRequest {
        ProductRequest::GetById(self)
    }

    fn from_request(request: ProductRequest) -> Option<Self> {
        match request {
            ProductRequest::GetById(query) => Some(query),
            _ => None,
        }
    }

    fn into_reply(response: Option<ProductDto>) -> ProductReply {
        ProductReply::Found(response)
    }

    fn from_reply(reply: ProductReply) -> Option<Option<ProductDto>> {
        match reply {
            ProductReply::Found(found) => Some(found),
            _ => None,
        }
    }
}

pub struct GetProductByIdHandler<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> GetProductByIdHandler<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ProductRepository> Handler for GetProductByIdHandler<R> {
    type Request = GetProductByIdQuery;

    #[instrument(skip(self), fields(product_id = query.id))]
    async fn handle(&self, query: GetProductByIdQuery) -> ProductResult<Option<ProductDto>> {
        let product = self.repository.get_by_id(query.id).await?;
        Ok(product.as_ref().map(ProductDto::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_found_product_is_mapped() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().with(eq(4)).returning(|id| {
            Ok(Some(Product::from_storage(
                id,
                "Widget".into(),
                "small".into(),
                Decimal::new(999, 2),
                5,
            )))
        });

        let handler = GetProductByIdHandler::new(Arc::new(mock_repo));
        let dto = handler
            .handle(GetProductByIdQuery { id: 4 })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(dto.id, 4);
        assert_eq!(dto.description, "small");
    }

    #[tokio::test]
    async fn test_missing_product_is_none_not_error() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let handler = GetProductByIdHandler::new(Arc::new(mock_repo));
        let result = handler.handle(GetProductByIdQuery { id: 999 }).await.unwrap();

        assert!(result.is_none());
    }
}
