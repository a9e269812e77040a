//! The catalog pagination controller.
//!
//! Owns [`CatalogState`] and runs every fetch against the remote catalog:
//! reset-vs-append pagination, the searchable listing switch, the total
//! watermark, and the load-more guard. Fetch failures never escape; they
//! surface as a notification while the loaded state stays intact.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::api::CatalogService;
use crate::catalog::state::CatalogState;
use crate::notify::Notifier;

/// Fixed user-facing message for any failed catalog fetch.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load products";

/// Options for a single [`CatalogController::fetch`] call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOptions {
    /// Discard loaded items and restart pagination from the first page.
    pub reset: bool,
    /// Search term to send. Whitespace-only means the paged listing; any
    /// other value switches the call to server-side search.
    pub search: String,
}

/// Cheaply cloneable handle; clones share one state.
pub struct CatalogController<S, N> {
    inner: Arc<ControllerInner<S, N>>,
}

struct ControllerInner<S, N> {
    state: RwLock<CatalogState>,
    /// Sequence number of the most recently issued fetch. A completion
    /// whose number no longer matches is superseded and gets discarded.
    seq: AtomicU64,
    page_size: u32,
    service: S,
    notifier: N,
}

impl<S, N> Clone for CatalogController<S, N> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: CatalogService, N: Notifier> CatalogController<S, N> {
    pub fn new(service: S, notifier: N, page_size: u32) -> Self {
        Self {
            inner: Arc::new(ControllerInner {
                state: RwLock::new(CatalogState::default()),
                seq: AtomicU64::new(0),
                page_size: page_size.max(1),
                service,
                notifier,
            }),
        }
    }

    /// Clone of the current catalog state.
    pub fn snapshot(&self) -> CatalogState {
        self.inner
            .state
            .read()
            .expect("catalog state lock poisoned")
            .clone()
    }

    pub fn page_size(&self) -> u32 {
        self.inner.page_size
    }

    /// `true` while the catalog size is unknown, then `items < total`.
    pub fn can_load_more(&self) -> bool {
        self.inner
            .state
            .read()
            .expect("catalog state lock poisoned")
            .can_load_more()
    }

    /// Run one fetch and fold the outcome into the shared state.
    ///
    /// On success a reset replaces the items and restarts the cursor; an
    /// append extends them and advances it. Either way the total and the
    /// active query come from this call. On failure the state is left
    /// untouched and the notifier receives [`LOAD_FAILED_MESSAGE`]. A
    /// fetch superseded by a later call before completing is dropped
    /// without applying anything.
    pub async fn fetch(&self, options: FetchOptions) {
        let seq = self.inner.seq.fetch_add(1, Ordering::SeqCst) + 1;

        let page = {
            let mut state = self
                .inner
                .state
                .write()
                .expect("catalog state lock poisoned");
            state.loading = true;
            if options.reset {
                0
            } else {
                state.page
            }
        };
        let skip = page * self.inner.page_size;

        let result = if options.search.trim().is_empty() {
            self.inner
                .service
                .list_products(skip, self.inner.page_size)
                .await
        } else {
            // The untrimmed term is what goes out on the wire.
            self.inner.service.search_products(&options.search).await
        };

        let mut failed = false;
        {
            let mut state = self
                .inner
                .state
                .write()
                .expect("catalog state lock poisoned");
            if self.inner.seq.load(Ordering::SeqCst) != seq {
                tracing::debug!(seq, "discarding superseded fetch");
                return;
            }
            match result {
                Ok(received) => {
                    if options.reset {
                        state.items = received.products;
                        state.page = 1;
                    } else {
                        state.items.extend(received.products);
                        state.page += 1;
                    }
                    state.total = received.total;
                    state.query = options.search;
                    tracing::debug!(
                        items = state.items.len(),
                        page = state.page,
                        total = ?state.total,
                        query = %state.query,
                        "catalog fetch applied"
                    );
                }
                Err(err) => {
                    tracing::warn!(error = %err, "catalog fetch failed");
                    failed = true;
                }
            }
            state.loading = false;
        }

        if failed {
            self.inner.notifier.notify(LOAD_FAILED_MESSAGE);
        }
    }
}
