//! # Hot Reload Module
//!
//! Live reloading of a routes file without restarting the process.
//!
//! ## Overview
//!
//! Hot reload watches the routes file for changes and:
//! - Detects file modifications using filesystem watchers
//! - Reloads and compiles the updated routes
//! - Lets the caller re-attach code-only state (filters) to the new table
//! - Publishes the new table atomically through a [`SharedRouteTable`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use uriroute::hot_reload::watch_routes;
//! use uriroute::router::SharedRouteTable;
//!
//! let shared = SharedRouteTable::new(table);
//! let watcher = watch_routes("routes.yaml", shared.clone(), HostPolicy::default(), |table| {
//!     let _ = table.set_filters("admin", admin_filters());
//! })?;
//!
//! // Keep `watcher` alive for as long as reloads should happen.
//! ```
//!
//! ## Error Handling
//!
//! If the new file fails to parse or a route fails to compile, the error is
//! logged and the previous table stays active. Requests keep being served
//! from whichever snapshot they started with.

use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::config::load_route_table;
use crate::route::HostPolicy;
use crate::router::{RouteTable, SharedRouteTable};

/// Watch a routes file and republish `shared` when it changes.
///
/// `on_reload` runs on every freshly built table before it is published.
///
/// # Errors
///
/// Returns the watcher error if the file cannot be watched.
pub fn watch_routes<P, F>(
    routes_path: P,
    shared: SharedRouteTable,
    policy: HostPolicy,
    mut on_reload: F,
) -> notify::Result<RecommendedWatcher>
where
    P: AsRef<Path>,
    F: FnMut(&mut RouteTable) + Send + 'static,
{
    let path: PathBuf = routes_path.as_ref().to_path_buf();
    let watch_path = path.clone();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    return;
                }
                match load_route_table(&watch_path, policy.clone()) {
                    Ok(mut table) => {
                        on_reload(&mut table);
                        info!(
                            path = %watch_path.display(),
                            routes = table.len(),
                            "hot-reload: applying route updates"
                        );
                        shared.publish(table);
                    }
                    Err(e) => error!(
                        path = %watch_path.display(),
                        error = ?e,
                        "hot-reload: keeping previous routes"
                    ),
                }
            }
            Err(e) => error!(error = %e, "hot-reload: watch error"),
        },
        Config::default(),
    )?;

    watcher.watch(&path, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}
