//! # Config Module
//!
//! Loads route tables from a static routes file at start-up.
//!
//! ## File Format
//!
//! YAML (`.yaml`/`.yml`), TOML (`.toml`) or JSON (anything else):
//!
//! ```yaml
//! base_path: /app
//! routes:
//!   - name: media
//!     uri: "media(/<file>)"
//!     regex:
//!       file: ".+"
//!     defaults:
//!       controller: Media
//!       action: serve
//!       method: [GET, HEAD]
//!   - name: default
//!     uri: "(<controller>(/<action>(/<id>)))"
//!     defaults:
//!       controller: Welcome
//!       action: index
//! ```
//!
//! Routes are registered in file order, which is also dispatch order.
//! `method`, `action` and `host` are reserved default keys; `host: false`
//! marks a route as local.

mod load;
mod types;
#[cfg(test)]
mod tests;

pub use load::{load_route_table, load_routes, parse_routes, RoutesFormat};
pub use types::{DefaultValue, RouteConfig, RoutesConfig};
