//! # Runtime Configuration Module
//!
//! Environment variable configuration for URL generation and logging.
//!
//! ## Environment Variables
//!
//! ### `URIROUTE_DEFAULT_PROTOCOL`
//!
//! Protocol prepended to external route hosts that do not carry one.
//! Default: `http://`. A value without `://` gets it appended, so `https`
//! and `https://` are equivalent.
//!
//! ### `URIROUTE_LOCAL_HOSTS`
//!
//! Comma separated host values that mark a route as local rather than
//! external. Default: `local,localhost`. The empty host is always local.
//!
//! ### Logging
//!
//! `URIROUTE_LOG_LEVEL`, `URIROUTE_LOG_FORMAT`, `URIROUTE_LOG_ASYNC` and
//! `URIROUTE_LOG_FILTER`; see [`crate::logging::LogConfig`].
//!
//! ## Usage
//!
//! ```rust
//! use uriroute::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("External routes default to {}", config.host_policy.default_protocol);
//! ```

use std::env;

use crate::logging::LogConfig;
use crate::route::HostPolicy;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// How external route hosts are recognised and prefixed
    pub host_policy: HostPolicy,
    /// Logging setup
    pub log: LogConfig,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut host_policy = HostPolicy::default();

        if let Some(protocol) = lookup("URIROUTE_DEFAULT_PROTOCOL").filter(|p| !p.is_empty()) {
            host_policy.default_protocol = if protocol.contains("://") {
                protocol
            } else {
                format!("{}://", protocol)
            };
        }

        if let Some(hosts) = lookup("URIROUTE_LOCAL_HOSTS") {
            host_policy.local_hosts = hosts
                .split(',')
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(str::to_string)
                .collect();
        }

        RuntimeConfig {
            host_policy,
            log: LogConfig::from_lookup(&lookup),
        }
    }
}
