//! Terminal storefront client.
//!
//! The core is the catalog pagination controller in [`catalog`]: a
//! reset-vs-append state machine over a remote paginated/searchable
//! product API, consumed by the ratatui presentation layer in [`ui`].
//! [`api`] holds the HTTP clients, [`session`] the login state and token
//! persistence, and [`mockd`] the companion mock authentication server.

pub mod api;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod mockd;
pub mod notify;
pub mod session;
pub mod ui;
