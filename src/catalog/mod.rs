//! Client-side catalog state: the pagination controller and the live
//! title filter.

mod controller;
mod filter;
mod state;

pub use controller::{CatalogController, FetchOptions, LOAD_FAILED_MESSAGE};
pub use filter::live_filter;
pub use state::CatalogState;
