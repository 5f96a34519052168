//! Request dispatch.
//!
//! Every request type maps to one [`RequestKind`]. [`MediatorBuilder::build`]
//! refuses to produce a [`Mediator`] unless each kind has exactly one handler,
//! so a wiring mistake stops the process at startup instead of surfacing on
//! the first request.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use strum::IntoEnumIterator;

use crate::commands::{CreateProductCommand, DeleteProductCommand, UpdateProductCommand};
use crate::error::{ProductError, ProductResult};
use crate::models::ProductDto;
use crate::queries::{GetAllProductsQuery, GetProductByIdQuery};
use crate::repository::ProductRepository;
use crate::use_cases::{
    CreateProductHandler, DeleteProductHandler, GetAllProductsHandler, GetProductByIdHandler,
    UpdateProductHandler,
};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter,
)]
pub enum RequestKind {
    CreateProduct,
    UpdateProduct,
    DeleteProduct,
    GetProductById,
    GetAllProducts,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductRequest {
    Create(CreateProductCommand),
    Update(UpdateProductCommand),
    Delete(DeleteProductCommand),
    GetById(GetProductByIdQuery),
    GetAll(GetAllProductsQuery),
}

impl ProductRequest {
    pub fn kind(&self) -> RequestKind {
        match self {
            ProductRequest::Create(_) => RequestKind::CreateProduct,
            ProductRequest::Update(_) => RequestKind::UpdateProduct,
            ProductRequest::Delete(_) => RequestKind::DeleteProduct,
            ProductRequest::GetById(_) => RequestKind::GetProductById,
            ProductRequest::GetAll(_) => RequestKind::GetAllProducts,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductReply {
    Created(ProductDto),
    Found(Option<ProductDto>),
    Listed(Vec<ProductDto>),
    Completed,
}

/// A typed request with a fixed kind and response.
pub trait Request: Send + Sized + 'static {
    const KIND: RequestKind;
    type Response: Send + 'static;

    fn into_request(self) -> ProductRequest;
    fn from_request(request: ProductRequest) -> Option<Self>;
    fn into_reply(response: Self::Response) -> ProductReply;
    fn from_reply(reply: ProductReply) -> Option<Self::Response>;
}

/// Executes one request type.
#[async_trait]
pub trait Handler: Send + Sync {
    type Request: Request;

    async fn handle(
        &self,
        request: Self::Request,
    ) -> ProductResult<<Self::Request as Request>::Response>;
}

#[async_trait]
trait ErasedHandler: Send + Sync {
    async fn handle(&self, request: ProductRequest) -> ProductResult<ProductReply>;
}

struct Erased<H>(H);

#[async_trait]
impl<H> ErasedHandler for Erased<H>
where
    H: Handler + 'static,
{
    async fn handle(&self, request: ProductRequest) -> ProductResult<ProductReply> {
        let received = request.kind();
        let request = H::Request::from_request(request).ok_or_else(|| {
            ProductError::Internal(format!(
                "{} handler received a {} request",
                H::Request::KIND,
                received
            ))
        })?;

        let response = self.0.handle(request).await?;
        Ok(H::Request::into_reply(response))
    }
}

#[derive(Default)]
pub struct MediatorBuilder {
    handlers: Vec<(RequestKind, Box<dyn ErasedHandler>)>,
}

impl MediatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<H>(mut self, handler: H) -> Self
    where
        H: Handler + 'static,
    {
        self.handlers
            .push((H::Request::KIND, Box::new(Erased(handler))));
        self
    }

    /// Fails with [`ProductError::Configuration`] when a kind has no handler or more than one.
    pub fn build(self) -> ProductResult<Mediator> {
        let mut table: HashMap<RequestKind, Box<dyn ErasedHandler>> = HashMap::new();

        for (kind, handler) in self.handlers {
            if table.insert(kind, handler).is_some() {
                return Err(ProductError::Configuration(format!(
                    "more than one handler registered for {}",
                    kind
                )));
            }
        }

        let missing: Vec<String> = RequestKind::iter()
            .filter(|kind| !table.contains_key(kind))
            .map(|kind| kind.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ProductError::Configuration(format!(
                "no handler registered for {}",
                missing.join(", ")
            )));
        }

        tracing::debug!(handlers = table.len(), "Mediator built");
        Ok(Mediator {
            handlers: Arc::new(table),
        })
    }
}

/// Routes each request to its registered handler.
#[derive(Clone)]
pub struct Mediator {
    handlers: Arc<HashMap<RequestKind, Box<dyn ErasedHandler>>>,
}

impl Mediator {
    pub fn builder() -> MediatorBuilder {
        MediatorBuilder::new()
    }

    /// Typed dispatch.
    pub async fn send<Q: Request>(&self, request: Q) -> ProductResult<Q::Response> {
        let reply = self.dispatch(request.into_request()).await?;
        Q::from_reply(reply).ok_or_else(|| {
            ProductError::Internal(format!("unexpected reply to a {} request", Q::KIND))
        })
    }

    pub async fn dispatch(&self, request: ProductRequest) -> ProductResult<ProductReply> {
        let kind = request.kind();
        let handler = self.handlers.get(&kind).ok_or_else(|| {
            ProductError::Configuration(format!("no handler registered for {}", kind))
        })?;

        tracing::debug!(%kind, "Dispatching request");
        handler.handle(request).await
    }
}

/// Mediator with the five product handlers sharing one repository.
pub fn product_mediator<R>(repository: Arc<R>) -> ProductResult<Mediator>
where
    R: ProductRepository + 'static,
{
    Mediator::builder()
        .register(CreateProductHandler::new(repository.clone()))
        .register(UpdateProductHandler::new(repository.clone()))
        .register(DeleteProductHandler::new(repository.clone()))
        .register(GetProductByIdHandler::new(repository.clone()))
        .register(GetAllProductsHandler::new(repository))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryProductRepository;
    use rust_decimal::Decimal;

    struct StaticList;

    #[async_trait]
    impl Handler for StaticList {
        type Request = GetAllProductsQuery;

        async fn handle(&self, _: GetAllProductsQuery) -> ProductResult<Vec<ProductDto>> {
            Ok(vec![])
        }
    }

    fn repository() -> Arc<InMemoryProductRepository> {
        Arc::new(InMemoryProductRepository::new())
    }

    #[test]
    fn test_request_kind_display() {
        assert_eq!(RequestKind::GetProductById.to_string(), "GetProductById");
        assert_eq!(RequestKind::iter().count(), 5);
    }

    #[test]
    fn test_build_fails_when_handlers_missing() {
        let result = Mediator::builder().register(StaticList).build();

        match result {
            Err(ProductError::Configuration(msg)) => {
                assert!(msg.contains("CreateProduct"));
                assert!(!msg.contains("GetAllProducts"));
            }
            _ => panic!("expected configuration error"),
        }
    }

    #[test]
    fn test_build_fails_on_duplicate_registration() {
        let repo = repository();
        let result = Mediator::builder()
            .register(GetAllProductsHandler::new(repo))
            .register(StaticList)
            .build();

        match result {
            Err(ProductError::Configuration(msg)) => {
                assert!(msg.contains("more than one handler registered for GetAllProducts"))
            }
            _ => panic!("expected configuration error"),
        }
    }

    #[test]
    fn test_product_mediator_is_complete() {
        assert!(product_mediator(repository()).is_ok());
    }

    #[tokio::test]
    async fn test_send_routes_to_matching_handler() {
        let mediator = product_mediator(repository()).unwrap();

        let created = mediator
            .send(CreateProductCommand {
                name: "Widget".into(),
                description: String::new(),
                price: Decimal::new(999, 2),
                stock_quantity: 5,
            })
            .await
            .unwrap();
        assert!(created.id > 0);

        let found = mediator
            .send(GetProductByIdQuery { id: created.id })
            .await
            .unwrap();
        assert_eq!(found, Some(created.clone()));

        let all = mediator.send(GetAllProductsQuery).await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn test_dispatch_returns_tagged_reply() {
        let mediator = product_mediator(repository()).unwrap();

        let reply = mediator
            .dispatch(ProductRequest::GetById(GetProductByIdQuery { id: 9 }))
            .await
            .unwrap();
        assert_eq!(reply, ProductReply::Found(None));
    }
}
