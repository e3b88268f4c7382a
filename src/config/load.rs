use anyhow::Context;
use std::path::Path;

use super::types::RoutesConfig;
use crate::route::HostPolicy;
use crate::router::RouteTable;

/// Serialization format of a routes file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutesFormat {
    Yaml,
    Json,
    Toml,
}

impl RoutesFormat {
    /// Pick a format from the file extension; anything unknown is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => RoutesFormat::Yaml,
            Some("toml") => RoutesFormat::Toml,
            _ => RoutesFormat::Json,
        }
    }
}

/// Parse routes from a string.
pub fn parse_routes(content: &str, format: RoutesFormat) -> anyhow::Result<RoutesConfig> {
    let config = match format {
        RoutesFormat::Yaml => serde_yaml::from_str(content)?,
        RoutesFormat::Json => serde_json::from_str(content)?,
        RoutesFormat::Toml => toml::from_str(content)?,
    };
    Ok(config)
}

/// Read and parse a routes file.
pub fn load_routes(path: impl AsRef<Path>) -> anyhow::Result<RoutesConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read routes file {}", path.display()))?;
    parse_routes(&content, RoutesFormat::from_path(path))
        .with_context(|| format!("failed to parse routes file {}", path.display()))
}

/// Read a routes file and build the table it describes.
pub fn load_route_table(path: impl AsRef<Path>, policy: HostPolicy) -> anyhow::Result<RouteTable> {
    let path = path.as_ref();
    let config = load_routes(path)?;
    config
        .build_table(policy)
        .with_context(|| format!("invalid route in {}", path.display()))
}
