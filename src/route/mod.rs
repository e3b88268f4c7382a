//! # Route Module
//!
//! A route pairs a template such as `(<controller>(/<action>(/<id>)))` with
//! two independent walkers over its syntax tree:
//!
//! 1. **Compilation** ([`PatternCompiler`]): the template becomes an anchored
//!    regex with one capture group per placeholder. Matching is linear in the
//!    length of the path.
//!
//! 2. **Generation** ([`UriGenerator`]): the template is rendered back into a
//!    path from a parameter map, dropping optional groups whose placeholders
//!    all sit at their defaults.
//!
//! [`RouteDefinition`] owns both, together with the route's defaults, method
//! constraint and filters.
//!
//! ## Example
//!
//! ```rust
//! use uriroute::route::{Defaults, Params, RouteDefinition};
//!
//! let route = RouteDefinition::new("(<controller>(/<action>(/<id>)))")
//!     .unwrap()
//!     .with_defaults(Defaults::new().with("controller", "Welcome").action("index"));
//!
//! let params = route.matches("/blog/show/7/", None).unwrap();
//! assert_eq!(params["controller"], "Blog");
//! assert_eq!(params["id"], "7");
//!
//! let mut wanted = Params::new();
//! wanted.insert("controller".into(), "blog".into());
//! assert_eq!(route.uri(&wanted).unwrap(), "blog");
//! ```
//!
//! ## Matching order
//!
//! `matches` trims slashes, runs the regex, fills defaults, checks the
//! method, canonicalises `controller`/`directory`, then runs filters in
//! order. Every rejection is a plain `None`.

mod compiler;
mod definition;
mod filter;
mod generator;
mod types;

pub use compiler::{CompiledPattern, PatternCompiler, DEFAULT_SEGMENT};
pub use definition::RouteDefinition;
pub use filter::{FilterFn, FilterOutcome, ParamCanonicalizer, StudlyCase};
pub use generator::UriGenerator;
pub use types::{Constraints, Defaults, HostPolicy, MethodConstraint, Params};
