//! Typed configuration for the storefront client.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AuthConfig, CatalogConfig, Config, Defaults};
