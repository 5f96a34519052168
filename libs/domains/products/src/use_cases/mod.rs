//! One handler per use case.
//!
//! Command handlers validate their input before touching the repository;
//! query handlers only read and map.

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;

pub use create::CreateProductHandler;
pub use delete::DeleteProductHandler;
pub use get_all::GetAllProductsHandler;
pub use get_by_id::GetProductByIdHandler;
pub use update::UpdateProductHandler;
