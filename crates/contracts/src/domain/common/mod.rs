//! Common traits shared by every backend-managed resource

pub mod resource;

// Re-exports
pub use resource::{Resource, ResourceFilter};
