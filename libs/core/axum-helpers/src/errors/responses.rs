//! Reusable OpenAPI responses for the problem-details body.

use super::ProblemDetails;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Validation failed",
    content_type = "application/problem+json",
    example = json!({
        "title": "Validation Error",
        "status": 400,
        "errors": {
            "Name": ["Name is required."],
            "Price": ["Price must be greater than 0."]
        }
    })
)]
pub struct ValidationProblemResponse(pub ProblemDetails);

#[derive(ToResponse)]
#[response(
    description = "Malformed request or rejected argument",
    content_type = "application/problem+json",
    example = json!({
        "title": "Bad Request",
        "status": 400,
        "detail": "Route id 5 does not match body id 6"
    })
)]
pub struct BadRequestProblemResponse(pub ProblemDetails);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/problem+json",
    example = json!({
        "title": "Resource Not Found",
        "status": 404,
        "detail": "Product with id 42 was not found"
    })
)]
pub struct NotFoundProblemResponse(pub ProblemDetails);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/problem+json",
    example = json!({
        "title": "Internal Server Error",
        "status": 500,
        "detail": "An unexpected error occurred on the server."
    })
)]
pub struct InternalProblemResponse(pub ProblemDetails);
