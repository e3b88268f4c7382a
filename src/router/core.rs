//! Route table core - registration order is dispatch order.

use http::Method;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::error::RouteError;
use crate::route::{FilterFn, HostPolicy, Params, RouteDefinition};

/// Result of dispatching a path against a [`RouteTable`].
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// Name the matching route was registered under
    pub name: Arc<str>,
    /// The matching route (Arc to avoid expensive clones)
    pub route: Arc<RouteDefinition>,
    /// Resolved parameters
    pub params: Params,
}

impl RouteMatch {
    /// Get a resolved parameter by name
    #[inline]
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Ordered, name-keyed collection of routes.
///
/// `dispatch` tries routes strictly in registration order, so specific routes
/// must be registered before catch-alls. Definitions are held behind `Arc`
/// and never mutated in place: [`RouteTable::update`] swaps in a new
/// definition, leaving holders of the old one unaffected.
#[derive(Clone, Default)]
pub struct RouteTable {
    routes: Vec<(Arc<str>, Arc<RouteDefinition>)>,
    index: HashMap<Arc<str>, usize>,
    /// Prefix for local URLs built by [`RouteTable::url`] (e.g. `/app`)
    base_path: String,
    host_policy: HostPolicy,
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    #[must_use]
    pub fn with_host_policy(mut self, policy: HostPolicy) -> Self {
        self.host_policy = policy;
        self
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    #[must_use]
    pub fn host_policy(&self) -> &HostPolicy {
        &self.host_policy
    }

    /// Register a route under `name`.
    ///
    /// Registration is idempotent: if `name` is already taken the table is
    /// left unchanged and the existing definition is returned.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        route: RouteDefinition,
    ) -> Arc<RouteDefinition> {
        let name = name.into();
        if let Some(existing) = self.get(&name) {
            debug!(route = %name, "Route already registered, keeping existing definition");
            return Arc::clone(existing);
        }

        let route = Arc::new(route);
        let name: Arc<str> = Arc::from(name);
        info!(
            route = %name,
            template = %route.template(),
            priority = self.routes.len(),
            "Route registered"
        );
        self.index.insert(Arc::clone(&name), self.routes.len());
        self.routes.push((name, Arc::clone(&route)));
        route
    }

    /// Register a route, replacing any definition already stored under
    /// `name`. A replaced route keeps its original dispatch position.
    ///
    /// Returns the previous definition, if any.
    pub fn replace(
        &mut self,
        name: impl Into<String>,
        route: RouteDefinition,
    ) -> Option<Arc<RouteDefinition>> {
        let name = name.into();
        if let Some(&slot) = self.index.get(name.as_str()) {
            warn!(route = %name, template = %route.template(), "Replacing route definition");
            return Some(std::mem::replace(&mut self.routes[slot].1, Arc::new(route)));
        }
        self.register(name, route);
        None
    }

    /// Swap the definition stored under `name` for `f(current)`.
    ///
    /// Used to change defaults or filters after registration; the template is
    /// carried over by `f` operating on a clone.
    ///
    /// # Errors
    ///
    /// [`RouteError::UnknownRoute`] when `name` is not registered.
    pub fn update<F>(&mut self, name: &str, f: F) -> Result<Arc<RouteDefinition>, RouteError>
    where
        F: FnOnce(RouteDefinition) -> RouteDefinition,
    {
        let slot = *self
            .index
            .get(name)
            .ok_or_else(|| RouteError::UnknownRoute { name: name.to_string() })?;
        let current = RouteDefinition::clone(&self.routes[slot].1);
        let next = Arc::new(f(current));
        self.routes[slot].1 = Arc::clone(&next);
        debug!(route = %name, "Route definition updated");
        Ok(next)
    }

    /// Replace the filter list of a registered route.
    ///
    /// # Errors
    ///
    /// [`RouteError::UnknownRoute`] when `name` is not registered.
    pub fn set_filters(&mut self, name: &str, filters: Vec<FilterFn>) -> Result<(), RouteError> {
        self.update(name, |route| route.with_filters(filters))
            .map(|_| ())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<RouteDefinition>> {
        self.index.get(name).map(|&slot| &self.routes[slot].1)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The name a definition is registered under, by identity.
    #[must_use]
    pub fn name_of(&self, route: &RouteDefinition) -> Option<&str> {
        self.routes
            .iter()
            .find(|(_, r)| std::ptr::eq(Arc::as_ptr(r), route))
            .map(|(name, _)| name.as_ref())
    }

    /// Routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<RouteDefinition>)> {
        self.routes.iter().map(|(name, route)| (name.as_ref(), route))
    }

    /// Route names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.routes.iter().map(|(name, _)| name.as_ref()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Find the first route, in registration order, that accepts `path` and
    /// `method`.
    ///
    /// # Returns
    ///
    /// * `Some(RouteMatch)` - the winning route and its parameters
    /// * `None` - no route matched (typically answered with 404)
    #[must_use]
    pub fn dispatch(&self, path: &str, method: Option<&Method>) -> Option<RouteMatch> {
        debug!(method = ?method, path = %path, routes = self.routes.len(), "Route match attempt");
        let match_start = Instant::now();

        for (name, route) in &self.routes {
            if let Some(params) = route.matches(path, method) {
                let match_duration = match_start.elapsed();
                if match_duration > Duration::from_millis(1) {
                    warn!(
                        method = ?method,
                        path = %path,
                        route = %name,
                        duration_us = match_duration.as_micros(),
                        "Slow route matching detected"
                    );
                } else {
                    debug!(
                        method = ?method,
                        path = %path,
                        route = %name,
                        params = ?params,
                        duration_us = match_duration.as_micros(),
                        "Route matched"
                    );
                }
                return Some(RouteMatch {
                    name: Arc::clone(name),
                    route: Arc::clone(route),
                    params,
                });
            }
        }

        debug!(
            method = ?method,
            path = %path,
            duration_us = match_start.elapsed().as_micros(),
            "No route matched"
        );
        None
    }

    /// Generate the path for a named route. External routes yield an
    /// absolute URL on their host.
    ///
    /// # Errors
    ///
    /// [`RouteError::UnknownRoute`] or [`RouteError::MissingParameter`].
    pub fn uri(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        let route = self
            .get(name)
            .ok_or_else(|| RouteError::UnknownRoute { name: name.to_string() })?;
        route.uri_with(params, &self.host_policy)
    }

    /// Like [`RouteTable::uri`], but local routes are prefixed with the
    /// table's base path and a leading `/`.
    ///
    /// # Errors
    ///
    /// [`RouteError::UnknownRoute`] or [`RouteError::MissingParameter`].
    pub fn url(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        let route = self
            .get(name)
            .ok_or_else(|| RouteError::UnknownRoute { name: name.to_string() })?;
        let uri = route.uri_with(params, &self.host_policy)?;
        if route.is_external_with(&self.host_policy) {
            return Ok(uri);
        }
        Ok(format!("{}/{}", self.base_path.trim_end_matches('/'), uri))
    }
}

impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.names())
            .field("base_path", &self.base_path)
            .field("host_policy", &self.host_policy)
            .finish()
    }
}
