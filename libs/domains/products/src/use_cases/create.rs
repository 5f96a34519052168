use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::commands::CreateProductCommand;
use crate::error::ProductResult;
use crate::mediator::{Handler, ProductReply, ProductRequest, Request, RequestKind};
use crate::models::{Product, ProductDto};
use crate::repository::ProductRepository;
use crate::validation::validate_command;

impl Request for CreateProductCommand {
    const KIND: RequestKind = RequestKind::CreateProduct;
    type Response = ProductDto;

    fn into_request(self) -> ProductRequest {
        ProductRequest::Create(self)
    }

    fn from_request(request: ProductRequest) -> Option<Self> {
        match request {
            ProductRequest::Create(command) => Some(command),
            _ => None,
        }
    }

    fn into_reply(response: ProductDto) -> ProductReply {
        ProductReply::Created(response)
    }

    fn from_reply(reply: ProductReply) -> Option<ProductDto> {
        match reply {
            ProductReply::Created(dto) => Some(dto),
            _ => None,
        }
    }
}

pub struct CreateProductHandler<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> CreateProductHandler<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ProductRepository> Handler for CreateProductHandler<R> {
    type Request = CreateProductCommand;

    #[instrument(skip(self, command), fields(product_name = %command.name))]
    async fn handle(&self, command: CreateProductCommand) -> ProductResult<ProductDto> {
        validate_command(&command)?;

        let product = Product::new(
            command.name,
            command.description,
            command.price,
            command.stock_quantity,
        )?;
        let saved = self.repository.add(product).await?;

        Ok(ProductDto::from(&saved))
    }
}
