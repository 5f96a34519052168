//! Read-only requests.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetProductByIdQuery {
    pub id: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAllProductsQuery;
