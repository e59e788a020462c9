//! Query-style access to a catalog source.
//!
//! [`CatalogQuery`] pairs a [`CatalogSource`] with a path segment and keeps
//! the latest [`QueryState`] in a watch channel, so screens can show a
//! loading indicator on the first fetch and keep stale data visible while a
//! refetch is in flight.
//!
//! Fetches may overlap. The busy flags clear only when the last request in
//! flight finishes, and a response older than the data already shown is
//! dropped.

use std::fmt;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use storefront_core::Product;
use tokio::sync::watch;

use crate::source::CatalogSource;
use crate::Result;

// ============================================================================
// QueryState
// ============================================================================

/// Observable state of a catalog query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    /// Products from the last successful fetch.
    pub data: Option<Vec<Product>>,

    /// A request is in flight and no data has arrived yet.
    pub is_loading: bool,

    /// A request is in flight (first load or refetch).
    pub is_fetching: bool,

    /// Message from the last failed fetch, cleared on success.
    pub error: Option<String>,
}

impl QueryState {
    /// Returns `true` while a request is in flight.
    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_fetching
    }

    /// Returns `true` once data is present and no request is in flight.
    pub fn is_ready(&self) -> bool {
        self.data.is_some() && !self.is_busy()
    }

    /// Products from the last successful fetch, or an empty slice.
    pub fn products(&self) -> &[Product] {
        self.data.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for QueryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_loading {
            write!(f, "loading")
        } else if self.is_fetching {
            write!(f, "fetching")
        } else if let Some(err) = &self.error {
            write!(f, "error: {err}")
        } else {
            match &self.data {
                Some(products) => write!(f, "ready ({} products)", products.len()),
                None => write!(f, "idle"),
            }
        }
    }
}

// ============================================================================
// CatalogQuery
// ============================================================================

/// Cached, observable fetch of one catalog path.
///
/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct CatalogQuery {
    inner: Arc<CatalogQueryInner>,
}

struct CatalogQueryInner {
    source: Arc<dyn CatalogSource>,
    path: String,
    tx: watch::Sender<QueryState>,
    // Bookkeeping below is only touched inside `send_modify`, under the
    // channel lock.
    in_flight: AtomicUsize,
    issued: AtomicU64,
    applied: AtomicU64,
}

impl CatalogQuery {
    /// Create an idle query for `path` on `source`.
    pub fn new(source: Arc<dyn CatalogSource>, path: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(QueryState::default());
        Self {
            inner: Arc::new(CatalogQueryInner {
                source,
                path: path.into(),
                tx,
                in_flight: AtomicUsize::new(0),
                issued: AtomicU64::new(0),
                applied: AtomicU64::new(0),
            }),
        }
    }

    /// The path segment this query requests.
    pub fn path(&self) -> &str {
        &self.inner.path
    }

    /// Current query state.
    pub fn state(&self) -> QueryState {
        self.inner.tx.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<QueryState> {
        self.inner.tx.subscribe()
    }

    /// Fetch the product list, updating state before and after.
    ///
    /// On failure the previous data is kept and the error text recorded.
    /// The caller always gets its own request's result, even when a newer
    /// response already replaced it in the shared state.
    pub async fn fetch(&self) -> Result<Vec<Product>> {
        let inner = &self.inner;
        let mut ticket = 0;
        inner.tx.send_modify(|state| {
            ticket = inner.issued.fetch_add(1, Ordering::SeqCst) + 1;
            inner.in_flight.fetch_add(1, Ordering::SeqCst);
            state.is_loading = state.data.is_none();
            state.is_fetching = true;
        });
        log::debug!(
            "Catalog query '{}' #{ticket} via {} → {}",
            inner.path,
            inner.source.name(),
            self.state()
        );

        let result = inner.source.fetch_products(&inner.path).await;

        let mut stale = false;
        inner.tx.send_modify(|state| {
            let remaining = inner.in_flight.fetch_sub(1, Ordering::SeqCst) - 1;
            stale = ticket < inner.applied.load(Ordering::SeqCst);
            if !stale {
                inner.applied.store(ticket, Ordering::SeqCst);
                match &result {
                    Ok(products) => {
                        state.data = Some(products.clone());
                        state.error = None;
                    }
                    Err(e) => state.error = Some(e.to_string()),
                }
            }
            state.is_fetching = remaining > 0;
            state.is_loading = state.is_fetching && state.data.is_none();
        });
        if stale {
            log::debug!("Catalog query '{}' #{ticket} superseded", inner.path);
        }
        if let Err(e) = &result {
            log::warn!("Catalog query '{}' failed: {e}", inner.path);
        }
        result
    }

    /// Fetch again, keeping current data visible while in flight.
    pub async fn refetch(&self) -> Result<Vec<Product>> {
        self.fetch().await
    }
}

impl fmt::Debug for CatalogQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogQuery")
            .field("source", &self.inner.source.name())
            .field("path", &self.inner.path)
            .field("state", &self.state())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
