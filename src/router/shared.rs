//! Lock-free publication of route table snapshots.

use arc_swap::ArcSwap;
use http::Method;
use std::sync::Arc;
use tracing::info;

use super::core::{RouteMatch, RouteTable};
use crate::error::RouteError;
use crate::route::Params;

/// A [`RouteTable`] that can be replaced while requests are being served.
///
/// Readers take a snapshot (`Arc<RouteTable>`) and keep using it for the
/// whole request; writers publish a complete new table in one atomic store.
/// A dispatch in flight therefore never sees a half-updated table.
#[derive(Clone)]
pub struct SharedRouteTable {
    inner: Arc<ArcSwap<RouteTable>>,
}

impl SharedRouteTable {
    #[must_use]
    pub fn new(table: RouteTable) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(table)),
        }
    }

    /// The current table.
    #[must_use]
    pub fn snapshot(&self) -> Arc<RouteTable> {
        self.inner.load_full()
    }

    /// Atomically install `table`, returning the one it replaced.
    pub fn publish(&self, table: RouteTable) -> Arc<RouteTable> {
        info!(routes = table.len(), "Publishing route table");
        self.inner.swap(Arc::new(table))
    }

    /// Copy the current table, apply `f`, and publish the result.
    ///
    /// `f` may run more than once if another writer publishes concurrently.
    pub fn modify<F>(&self, f: F)
    where
        F: Fn(&mut RouteTable),
    {
        self.inner.rcu(|current| {
            let mut next = RouteTable::clone(current);
            f(&mut next);
            next
        });
    }

    /// Dispatch against the current table.
    #[must_use]
    pub fn dispatch(&self, path: &str, method: Option<&Method>) -> Option<RouteMatch> {
        self.inner.load().dispatch(path, method)
    }

    /// Generate a path against the current table.
    ///
    /// # Errors
    ///
    /// See [`RouteTable::uri`].
    pub fn uri(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        self.inner.load().uri(name, params)
    }
}

impl Default for SharedRouteTable {
    fn default() -> Self {
        Self::new(RouteTable::default())
    }
}

impl std::fmt::Debug for SharedRouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedRouteTable")
            .field(&*self.inner.load())
            .finish()
    }
}
