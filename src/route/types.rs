use http::Method;
use std::collections::BTreeMap;
use tracing::warn;

/// Resolved route parameters, keyed by placeholder or default name.
pub type Params = BTreeMap<String, String>;

/// Per-placeholder regex fragments that replace the default segment pattern.
pub type Constraints = BTreeMap<String, String>;

/// Which HTTP methods a route accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MethodConstraint {
    /// Any method, including none at all
    #[default]
    Any,
    /// Exactly one method
    One(Method),
    /// Any method in the set
    Set(Vec<Method>),
    /// A method default that did not parse; no request method satisfies it
    Invalid(String),
}

impl MethodConstraint {
    /// Parse a constraint from a comma or pipe separated list such as
    /// `"GET, HEAD"` or `"post"`. Names are upper-cased before parsing.
    ///
    /// # Errors
    ///
    /// Returns the `http` crate's error for a name that is not a valid token.
    pub fn parse(spec: &str) -> Result<Self, http::method::InvalidMethod> {
        let methods = spec
            .split([',', '|'])
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(|m| Method::from_bytes(m.to_ascii_uppercase().as_bytes()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_methods(methods))
    }

    /// Collapse a list of methods into the narrowest constraint.
    #[must_use]
    pub fn from_methods(methods: Vec<Method>) -> Self {
        let mut methods = methods.into_iter().fold(Vec::new(), |mut acc, m| {
            if !acc.contains(&m) {
                acc.push(m);
            }
            acc
        });
        match methods.len() {
            0 => MethodConstraint::Any,
            1 => MethodConstraint::One(methods.remove(0)),
            _ => MethodConstraint::Set(methods),
        }
    }

    /// Whether `method` satisfies this constraint.
    ///
    /// A constrained route never accepts a request without a method.
    #[must_use]
    pub fn allows(&self, method: Option<&Method>) -> bool {
        match (self, method) {
            (MethodConstraint::Any, _) => true,
            (_, None) => false,
            (MethodConstraint::One(expected), Some(m)) => expected == m,
            (MethodConstraint::Set(set), Some(m)) => set.contains(m),
            (MethodConstraint::Invalid(_), Some(_)) => false,
        }
    }

    #[must_use]
    pub fn is_any(&self) -> bool {
        matches!(self, MethodConstraint::Any)
    }
}

impl std::fmt::Display for MethodConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MethodConstraint::Any => write!(f, "*"),
            MethodConstraint::One(m) => write!(f, "{}", m),
            MethodConstraint::Set(set) => {
                let names: Vec<&str> = set.iter().map(Method::as_str).collect();
                write!(f, "{}", names.join("|"))
            }
            MethodConstraint::Invalid(raw) => write!(f, "!{}", raw),
        }
    }
}

/// Default values for a route.
///
/// The reserved keys `action`, `host` and `method` are typed fields; every
/// other key lives in the open extension map. `host` and `method` steer
/// routing and generation and are never reported as parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Defaults {
    /// Fallback action name
    pub action: Option<String>,
    /// External host; `None` or a local sentinel means the route is local
    pub host: Option<String>,
    /// Accepted HTTP methods
    pub method: MethodConstraint,
    values: Params,
}

impl Defaults {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a default, routing reserved keys to their typed fields.
    ///
    /// An unparseable `method` value is logged and stored as
    /// [`MethodConstraint::Invalid`], so the route accepts no method.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    #[must_use]
    pub fn method(mut self, method: MethodConstraint) -> Self {
        self.method = method;
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            "action" => self.action = Some(value),
            "host" => self.host = Some(value),
            "method" => match MethodConstraint::parse(&value) {
                Ok(method) => self.method = method,
                Err(err) => {
                    warn!(
                        value = %value,
                        error = %err,
                        "Invalid method default, route will reject every method"
                    );
                    self.method = MethodConstraint::Invalid(value);
                }
            },
            _ => {
                self.values.insert(key, value);
            }
        }
    }

    /// Default value for a parameter key. Reserved routing keys (`host`,
    /// `method`) have no parameter value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "action" => self.action.as_deref(),
            "host" | "method" => None,
            _ => self.values.get(key).map(String::as_str),
        }
    }

    /// Every default that is reported as a parameter: `action` plus the
    /// extension map.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.action
            .as_deref()
            .map(|a| ("action", a))
            .into_iter()
            .chain(self.values.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// The open extension map.
    #[must_use]
    pub fn values(&self) -> &Params {
        &self.values
    }
}

impl<K, V> FromIterator<(K, V)> for Defaults
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut defaults = Defaults::new();
        for (k, v) in iter {
            defaults.insert(k, v);
        }
        defaults
    }
}

/// Decides whether a route's `host` default points off-site, and how to
/// prefix generated paths when it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPolicy {
    /// Protocol prepended to external hosts that carry none (e.g. `http://`)
    pub default_protocol: String,
    /// Host values that mean "this application"; the empty string always does
    pub local_hosts: Vec<String>,
}

impl Default for HostPolicy {
    fn default() -> Self {
        Self {
            default_protocol: "http://".to_string(),
            local_hosts: vec!["local".to_string(), "localhost".to_string()],
        }
    }
}

impl HostPolicy {
    #[must_use]
    pub fn is_local(&self, host: &str) -> bool {
        host.is_empty() || self.local_hosts.iter().any(|h| h == host)
    }

    /// Join an external host and a generated path with a single `/`; an
    /// empty path yields the bare host.
    #[must_use]
    pub fn external_url(&self, host: &str, path: &str) -> String {
        let host = host.trim_end_matches('/');
        let separator = if path.is_empty() { "" } else { "/" };
        if host.contains("://") {
            format!("{}{}{}", host, separator, path)
        } else {
            format!("{}{}{}{}", self.default_protocol, host, separator, path)
        }
    }
}
