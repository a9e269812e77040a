//! Shared state for the catalog list.

use crate::api::Product;

/// Snapshot of the catalog list: what has been loaded, where pagination
/// stands, and whether a fetch is in flight.
///
/// Only [`CatalogController::fetch`] mutates this; everything else works
/// on clones.
///
/// [`CatalogController::fetch`]: super::CatalogController::fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    /// Loaded products in arrival order. Pages are appended as received;
    /// the server contract is the only de-duplication.
    pub items: Vec<Product>,

    /// Next page index to request: 0 before any fetch, 1 after a reset.
    pub page: u32,

    /// Total reported by the most recent successful fetch. `None` until a
    /// response carries one, which means "size unknown, keep paging".
    pub total: Option<u32>,

    /// The last submitted search term. Empty means listing mode.
    pub query: String,

    /// A fetch is in flight.
    pub loading: bool,
}

impl CatalogState {
    /// `true` while the catalog size is unknown, then `items < total`.
    ///
    /// Pure predicate over this snapshot; the list view consults it before
    /// dispatching an end-of-list fetch.
    pub fn can_load_more(&self) -> bool {
        match self.total {
            None => true,
            Some(total) => (self.items.len() as u32) < total,
        }
    }
}
