use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::route::{Constraints, Defaults, HostPolicy, MethodConstraint, RouteDefinition};
use crate::router::RouteTable;

/// A routes file: an optional base path and the routes in priority order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Prefix for local URLs (e.g. `/app`)
    #[serde(default)]
    pub base_path: String,
    /// Routes in dispatch order
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

/// One route entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub name: String,
    /// Route template, e.g. `(<controller>(/<action>(/<id>)))`
    pub uri: String,
    /// Per-placeholder regex fragments
    #[serde(default, alias = "constraints")]
    pub regex: Constraints,
    #[serde(default)]
    pub defaults: BTreeMap<String, DefaultValue>,
}

/// A default as written in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
}

impl DefaultValue {
    fn scalar(&self) -> Option<String> {
        match self {
            DefaultValue::Bool(b) => Some(b.to_string()),
            DefaultValue::Int(i) => Some(i.to_string()),
            DefaultValue::Float(f) => Some(f.to_string()),
            DefaultValue::Text(s) => Some(s.clone()),
            DefaultValue::List(_) => None,
        }
    }
}

impl RouteConfig {
    /// Typed defaults for this entry.
    ///
    /// # Errors
    ///
    /// Invalid method names, a `host: true`, or a list for any key other than
    /// `method`.
    pub fn defaults(&self) -> anyhow::Result<Defaults> {
        let mut defaults = Defaults::new();
        for (key, value) in &self.defaults {
            match (key.as_str(), value) {
                ("method", DefaultValue::Text(spec)) => {
                    defaults.method = MethodConstraint::parse(spec)
                        .with_context(|| format!("route '{}': invalid method '{}'", self.name, spec))?;
                }
                ("method", DefaultValue::List(items)) => {
                    defaults.method = MethodConstraint::parse(&items.join(","))
                        .with_context(|| format!("route '{}': invalid method list", self.name))?;
                }
                ("method", other) => {
                    bail!("route '{}': method must be a string or list, got {:?}", self.name, other)
                }
                ("host", DefaultValue::Bool(false)) => defaults.host = None,
                ("host", DefaultValue::Text(host)) => defaults.host = Some(host.clone()),
                ("host", other) => {
                    bail!("route '{}': host must be a string or false, got {:?}", self.name, other)
                }
                (key, value) => match value.scalar() {
                    Some(text) => defaults.insert(key, text),
                    None => bail!("route '{}': default '{}' must be a scalar", self.name, key),
                },
            }
        }
        Ok(defaults)
    }

    /// Compile this entry into a route.
    ///
    /// # Errors
    ///
    /// Malformed templates, invalid constraints, or invalid defaults.
    pub fn to_definition(&self) -> anyhow::Result<RouteDefinition> {
        let defaults = self.defaults()?;
        let route = RouteDefinition::with_constraints(&self.uri, self.regex.clone())
            .with_context(|| format!("route '{}' has an invalid template", self.name))?;
        Ok(route.with_defaults(defaults))
    }
}

impl RoutesConfig {
    /// Build a route table, registering entries in file order.
    ///
    /// A repeated name keeps the first entry.
    ///
    /// # Errors
    ///
    /// The first entry that fails to compile.
    pub fn build_table(&self, policy: HostPolicy) -> anyhow::Result<RouteTable> {
        let mut table = RouteTable::new()
            .with_base_path(self.base_path.clone())
            .with_host_policy(policy);

        for entry in &self.routes {
            let route = entry.to_definition()?;
            if table.contains(&entry.name) {
                warn!(route = %entry.name, "Duplicate route name in config, keeping first entry");
                continue;
            }
            table.register(entry.name.clone(), route);
        }

        let routes_summary: Vec<String> = table
            .iter()
            .take(10)
            .map(|(name, route)| format!("{} {}", name, route.template()))
            .collect();
        info!(
            routes_count = table.len(),
            base_path = %self.base_path,
            routes_summary = ?routes_summary,
            "Routing table loaded"
        );
        Ok(table)
    }
}
