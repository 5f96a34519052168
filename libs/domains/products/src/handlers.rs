use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{
    ApiJson, IdPath,
    errors::responses::{
        BadRequestProblemResponse, InternalProblemResponse, NotFoundProblemResponse,
        ValidationProblemResponse,
    },
};
use utoipa::OpenApi;

use crate::commands::{CreateProductCommand, DeleteProductCommand, UpdateProductCommand};
use crate::error::{ProductError, ProductResult};
use crate::mediator::Mediator;
use crate::models::ProductDto;
use crate::queries::{GetAllProductsQuery, GetProductByIdQuery};

pub const TAG: &str = "products";

/// Public path of the collection; `Location` headers point below it.
pub const COLLECTION_PATH: &str = "/api/products";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        get_product,
        create_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(ProductDto, CreateProductCommand, UpdateProductCommand),
        responses(
            ValidationProblemResponse,
            BadRequestProblemResponse,
            NotFoundProblemResponse,
            InternalProblemResponse
        )
    ),
    tags(
        (name = TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router with all HTTP endpoints
pub fn router(mediator: Mediator) -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(mediator)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All products ordered by id", body = Vec<ProductDto>),
        (status = 500, response = InternalProblemResponse)
    )
)]
async fn list_products(State(mediator): State<Mediator>) -> ProductResult<Json<Vec<ProductDto>>> {
    let products = mediator.send(GetAllProductsQuery).await?;
    Ok(Json(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = ProductDto),
        (status = 400, response = BadRequestProblemResponse),
        (status = 404, description = "Product not found; the body is empty"),
        (status = 500, response = InternalProblemResponse)
    )
)]
async fn get_product(
    State(mediator): State<Mediator>,
    IdPath(id): IdPath,
) -> ProductResult<Response> {
    let response = match mediator.send(GetProductByIdQuery { id }).await? {
        Some(product) => Json(product).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    };
    Ok(response)
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProductCommand,
    responses(
        (status = 201, description = "Product created", body = ProductDto,
            headers(("Location" = String, description = "URL of the new product"))),
        (status = 400, response = ValidationProblemResponse),
        (status = 500, response = InternalProblemResponse)
    )
)]
async fn create_product(
    State(mediator): State<Mediator>,
    ApiJson(command): ApiJson<CreateProductCommand>,
) -> ProductResult<impl IntoResponse> {
    let product = mediator.send(command).await?;
    let location = format!("{}/{}", COLLECTION_PATH, product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

/// Replace a product's fields
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Product id; must equal the body id")),
    request_body = UpdateProductCommand,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, response = ValidationProblemResponse),
        (status = 404, response = NotFoundProblemResponse),
        (status = 500, response = InternalProblemResponse)
    )
)]
async fn update_product(
    State(mediator): State<Mediator>,
    IdPath(id): IdPath,
    ApiJson(command): ApiJson<UpdateProductCommand>,
) -> ProductResult<StatusCode> {
    if command.id != id {
        return Err(ProductError::IdMismatch {
            path: id,
            body: command.id,
        });
    }

    mediator.send(command).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, response = BadRequestProblemResponse),
        (status = 404, response = NotFoundProblemResponse),
        (status = 500, response = InternalProblemResponse)
    )
)]
async fn delete_product(
    State(mediator): State<Mediator>,
    IdPath(id): IdPath,
) -> ProductResult<StatusCode> {
    mediator.send(DeleteProductCommand { id }).await?;
    Ok(StatusCode::NO_CONTENT)
}
