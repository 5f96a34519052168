use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::commands::DeleteProductCommand;
use crate::error::{ProductError, ProductResult};
use crate::mediator::{Handler, ProductReply, ProductRequest, Request, RequestKind};
use crate::repository::ProductRepository;

impl Request for DeleteProductCommand {
    const KIND: RequestKind = RequestKind::DeleteProduct;
    type Response = ();

    fn into_request(self) -> ProductRequest {
        ProductRequest::Delete(self)
    }

    fn from_request(request: ProductRequest) -> Option<Self> {
        match request {
            ProductRequest::Delete(command) => Some(command),
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

/// Deleting an id that is not stored is `NotFound`, also on a repeated delete.
pub struct DeleteProductHandler<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> DeleteProductHandler<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ProductRepository> Handler for DeleteProductHandler<R> {
    type Request = DeleteProductCommand;

    #[instrument(skip(self), fields(product_id = command.id))]
    async fn handle(&self, command: DeleteProductCommand) -> ProductResult<()> {
        let product = self
            .repository
            .get_by_id(command.id)
            .await?
            .ok_or(ProductError::NotFound(command.id))?;

        self.repository.delete(product).await
    }
}
