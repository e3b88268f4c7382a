//! # uriroute
//!
//! **uriroute** maps request paths to named routes and generates paths back
//! from those routes, using one template syntax for both directions.
//!
//! ## Overview
//!
//! A route template is literal text with `<name>` placeholders and nestable
//! `( ... )` optional groups:
//!
//! ```text
//! (<controller>(/<action>(/<id>)))
//! media(/<file>)
//! ```
//!
//! Each template is compiled once into an anchored regex for matching and
//! kept as a syntax tree for reverse generation. Routes are registered by
//! name in a [`RouteTable`], which dispatches paths in registration order.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - **[`template`]** - Template parsing into a typed segment tree
//! - **[`route`]** - Pattern compilation, matching, filters and URI generation
//! - **[`router`]** - Named route table, dispatch and lock-free publication
//! - **[`config`]** - Loading route tables from YAML, TOML or JSON files
//! - **[`hot_reload`]** - Live reloading of a routes file
//! - **[`runtime_config`]** - Environment-driven settings (host policy, logging)
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - Command-line inspection of a routes file
//! - **[`error`]** - The [`RouteError`] type
//!
//! ## Quick Start
//!
//! ```rust
//! use uriroute::{Defaults, Params, RouteDefinition, RouteTable};
//!
//! let mut table = RouteTable::new();
//! table.register(
//!     "default",
//!     RouteDefinition::new("(<controller>(/<action>(/<id>)))")
//!         .unwrap()
//!         .with_defaults(Defaults::new().with("controller", "Welcome").action("index")),
//! );
//!
//! let matched = table.dispatch("/", None).unwrap();
//! assert_eq!(matched.get_param("controller"), Some("Welcome"));
//! assert_eq!(matched.get_param("action"), Some("index"));
//!
//! let mut params = Params::new();
//! params.insert("controller".into(), "blog".into());
//! params.insert("id".into(), "7".into());
//! assert_eq!(table.uri("default", &params).unwrap(), "blog/index/7");
//! ```
//!
//! ## Logging
//!
//! The library logs through `tracing`: registrations at `info`, dispatch at
//! `debug`, rejections at `trace`. Binaries install a subscriber with
//! [`logging::init_logging`].

pub mod cli;
pub mod config;
pub mod error;
pub mod hot_reload;
pub mod logging;
pub mod route;
pub mod router;
pub mod runtime_config;
pub mod template;

pub use error::RouteError;
pub use route::{
    Constraints, Defaults, FilterFn, FilterOutcome, HostPolicy, MethodConstraint, Params,
    RouteDefinition, UriGenerator,
};
pub use router::{RouteMatch, RouteTable, SharedRouteTable};
pub use template::{RouteTemplate, TemplateError};
