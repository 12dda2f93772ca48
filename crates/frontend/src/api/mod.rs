pub mod client;
pub mod error;

pub use client::{api_base, use_api, ApiClient};
pub use error::ApiError;
