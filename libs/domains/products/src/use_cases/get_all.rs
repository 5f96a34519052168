use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductResult;
use crate::mapper::to_dtos;
use crate::mediator::{Handler, ProductReply, ProductRequest, Request, RequestKind};
use crate::models::ProductDto;
use crate::queries::GetAllProductsQuery;
use crate::repository::ProductRepository;

impl Request for GetAllProductsQuery {
    const KIND: RequestKind = RequestKind::GetAllProducts;
    type Response = Vec<ProductDto>;

    fn into_request(self) -> ProductRequest {
        ProductRequest::GetAll(self)
    }

    fn from_request(request: ProductRequest) -> Option<Self> {
        match request {
            ProductRequest::GetAll(query) => Some(query),
            _ => None,
        }
    }

    fn into_reply(response: Vec<ProductDto>) -> ProductReply {
        ProductReply::Listed(response)
    }

    fn from_reply(reply: ProductReply) -> Option<Vec<ProductDto>> {
        match reply {
            ProductReply::Listed(products) => Some(products),
            _ => None,
        }
    }
}

pub struct GetAllProductsHandler<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> GetAllProductsHandler<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ProductRepository> Handler for GetAllProductsHandler<R> {
    type Request = GetAllProductsQuery;

    #[instrument(skip_all)]
    async fn handle(&self, _query: GetAllProductsQuery) -> ProductResult<Vec<ProductDto>> {
        let products = self.repository.get_all().await?;
        Ok(to_dtos(&products))
    }
}
