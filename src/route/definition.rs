use http::Method;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

use super::compiler::{CompiledPattern, PatternCompiler};
use super::filter::{FilterFn, FilterOutcome, ParamCanonicalizer, StudlyCase};
use super::generator::UriGenerator;
use super::types::{Constraints, Defaults, HostPolicy, MethodConstraint, Params};
use crate::error::RouteError;
use crate::template::RouteTemplate;

/// A single named route: template, compiled matcher, defaults and filters.
///
/// The template and constraints are fixed at construction and the pattern is
/// compiled eagerly. Defaults and filters can only be changed by building a
/// new value ([`RouteDefinition::with_defaults`], [`RouteDefinition::with_filters`]),
/// so a definition shared behind an `Arc` is never observed half-updated.
#[derive(Clone)]
pub struct RouteDefinition {
    template: RouteTemplate,
    constraints: Constraints,
    pattern: CompiledPattern,
    defaults: Defaults,
    filters: Vec<FilterFn>,
    canonicalizer: Option<Arc<dyn ParamCanonicalizer>>,
}

impl RouteDefinition {
    /// Build a route from a template with no constraints.
    ///
    /// # Errors
    ///
    /// A [`RouteError::Template`] when the template is malformed.
    pub fn new(template: &str) -> Result<Self, RouteError> {
        Self::with_constraints(template, Constraints::new())
    }

    /// Build a route whose placeholders are restricted by `constraints`.
    ///
    /// # Errors
    ///
    /// Malformed templates and constraint fragments that do not compile.
    pub fn with_constraints(template: &str, constraints: Constraints) -> Result<Self, RouteError> {
        let template = RouteTemplate::parse(template)?;
        let pattern = PatternCompiler::compile(&template, &constraints)?;
        Ok(Self {
            template,
            constraints,
            pattern,
            defaults: Defaults::default(),
            filters: Vec::new(),
            canonicalizer: Some(Arc::new(StudlyCase)),
        })
    }

    /// Replace the defaults.
    #[must_use]
    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Replace the method constraint, keeping the other defaults.
    #[must_use]
    pub fn with_method(mut self, method: MethodConstraint) -> Self {
        self.defaults.method = method;
        self
    }

    /// Replace the whole filter list.
    #[must_use]
    pub fn with_filters(mut self, filters: Vec<FilterFn>) -> Self {
        self.filters = filters;
        self
    }

    /// Append a filter; filters run in the order they were added.
    #[must_use]
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&RouteDefinition, &Params, &str) -> FilterOutcome + Send + Sync + 'static,
    {
        self.filters.push(Arc::new(filter));
        self
    }

    /// Replace the parameter canonicalizer; `None` disables it.
    #[must_use]
    pub fn with_canonicalizer(mut self, canonicalizer: Option<Arc<dyn ParamCanonicalizer>>) -> Self {
        self.canonicalizer = canonicalizer;
        self
    }

    #[must_use]
    pub fn template(&self) -> &RouteTemplate {
        &self.template
    }

    #[must_use]
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    #[must_use]
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    #[must_use]
    pub fn method_constraint(&self) -> &MethodConstraint {
        &self.defaults.method
    }

    #[must_use]
    pub fn filters(&self) -> &[FilterFn] {
        &self.filters
    }

    /// The compiled matcher.
    #[must_use]
    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    /// Test a request path (and method) against this route.
    ///
    /// Leading and trailing `/` are ignored. On success the result holds every
    /// captured placeholder, falling back to the default for placeholders that
    /// captured nothing, plus every parameter default. Returns `None` when the
    /// path does not match, the method is not accepted, or a filter vetoes.
    #[must_use]
    pub fn matches(&self, path: &str, method: Option<&Method>) -> Option<Params> {
        let path = path.trim_matches('/');
        let captured = self.pattern.captures(path)?;

        let mut params = Params::new();
        for name in self.template.placeholders() {
            let value = captured
                .get(name)
                .filter(|v| !v.is_empty())
                .map(String::as_str)
                .or_else(|| self.defaults.get(name))
                .or_else(|| captured.get(name).map(String::as_str));
            if let Some(value) = value {
                params.insert(name.clone(), value.to_string());
            }
        }
        for (key, value) in self.defaults.params() {
            params
                .entry(key.to_string())
                .or_insert_with(|| value.to_string());
        }

        if !self.defaults.method.allows(method) {
            trace!(
                template = %self.template,
                method = ?method,
                allowed = %self.defaults.method,
                "Route rejected by method constraint"
            );
            return None;
        }

        if let Some(canonicalizer) = &self.canonicalizer {
            canonicalizer.canonicalize(&mut params);
        }

        for filter in &self.filters {
            match filter(self, &params, path) {
                FilterOutcome::Veto => {
                    trace!(template = %self.template, path = %path, "Route vetoed by filter");
                    return None;
                }
                FilterOutcome::Rewrite(rewritten) => params = rewritten,
                FilterOutcome::NoOpinion => {}
            }
        }

        Some(params)
    }

    /// Whether the route's `host` default points at another site.
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.is_external_with(&HostPolicy::default())
    }

    #[must_use]
    pub fn is_external_with(&self, policy: &HostPolicy) -> bool {
        self.defaults
            .host
            .as_deref()
            .is_some_and(|host| !policy.is_local(host))
    }

    /// Generate a path for this route with the default [`HostPolicy`].
    ///
    /// # Errors
    ///
    /// [`RouteError::MissingParameter`] when a required placeholder is unresolved.
    pub fn uri(&self, params: &Params) -> Result<String, RouteError> {
        self.uri_with(params, &HostPolicy::default())
    }

    /// Generate a path for this route. External routes yield an absolute URL
    /// on their host.
    ///
    /// # Errors
    ///
    /// [`RouteError::MissingParameter`] when a required placeholder is unresolved.
    pub fn uri_with(&self, params: &Params, policy: &HostPolicy) -> Result<String, RouteError> {
        let path = UriGenerator::generate(&self.template, &self.defaults, params)?;
        match self.defaults.host.as_deref() {
            Some(host) if !policy.is_local(host) => Ok(policy.external_url(host, &path)),
            _ => Ok(path),
        }
    }
}

impl fmt::Debug for RouteDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDefinition")
            .field("template", &self.template.as_str())
            .field("pattern", &self.pattern.as_str())
            .field("constraints", &self.constraints)
            .field("defaults", &self.defaults)
            .field("filters", &self.filters.len())
            .field("canonicalizer", &self.canonicalizer.is_some())
            .finish()
    }
}
