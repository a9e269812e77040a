//! HTTP access to the remote storefront services.
//!
//! [`ApiClient`] owns the shared reqwest client and the bearer-token
//! attachment; [`HttpCatalog`] speaks the product catalog endpoints;
//! [`AuthStrategy`] runs the login call against whichever authentication
//! service the configuration selected.

mod auth;
mod catalog;
mod client;

pub use auth::{AuthError, AuthStrategy, Credentials};
pub use catalog::{CatalogService, HttpCatalog, Product, ProductPage};
pub use client::{ApiClient, ApiError};
