//! Extractors whose rejections are problem-details responses.

pub mod api_json;
pub mod id_path;

pub use api_json::ApiJson;
pub use id_path::IdPath;
