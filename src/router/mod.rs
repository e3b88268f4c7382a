//! # Router Module
//!
//! The router module holds the named route table and dispatches request
//! paths against it.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Registering named [`RouteDefinition`](crate::route::RouteDefinition)s in priority order
//! - Matching incoming paths to the first route that accepts them
//! - Generating paths and URLs for named routes
//! - Publishing new tables to running request handlers without locking
//!
//! ## Architecture
//!
//! The router uses a two-phase approach:
//!
//! 1. **Registration**: At startup, each route template is compiled into an
//!    anchored regex as it is registered. A name can only be registered once
//!    unless [`RouteTable::replace`] is used.
//!
//! 2. **Dispatch**: For each incoming request, the table tests the path
//!    against every route in registration order until one accepts it,
//!    returning the route name and resolved parameters.
//!
//! ## Example
//!
//! ```rust
//! use uriroute::route::{Defaults, Params, RouteDefinition};
//! use uriroute::router::RouteTable;
//!
//! let mut table = RouteTable::new();
//! table.register(
//!     "default",
//!     RouteDefinition::new("(<controller>(/<action>(/<id>)))")
//!         .unwrap()
//!         .with_defaults(Defaults::new().with("controller", "Welcome").action("index")),
//! );
//!
//! let matched = table.dispatch("/blog/show/7", None).unwrap();
//! assert_eq!(&*matched.name, "default");
//! assert_eq!(matched.get_param("action"), Some("show"));
//!
//! let mut params = Params::new();
//! params.insert("controller".into(), "blog".into());
//! params.insert("action".into(), "show".into());
//! assert_eq!(table.uri("default", &params).unwrap(), "blog/show");
//! ```
//!
//! ## Concurrency
//!
//! Dispatch and generation never mutate the table. Build the table before
//! serving requests, or publish replacements through [`SharedRouteTable`].

mod core;
mod shared;

pub use self::core::{RouteMatch, RouteTable};
pub use shared::SharedRouteTable;
