//! # Template Module
//!
//! Parses declarative route templates into a typed syntax tree shared by the
//! matcher ([`crate::route::PatternCompiler`]) and the reverse generator
//! ([`crate::route::UriGenerator`]).
//!
//! ## Grammar
//!
//! ```text
//! template    := segment*
//! segment     := literal | placeholder | optional
//! placeholder := '<' [A-Za-z0-9_]+ '>'
//! optional    := '(' segment* ')'
//! literal     := any character except ( ) < >
//! ```
//!
//! Optional groups may nest to any depth. A placeholder can never straddle a
//! group boundary because the placeholder body admits only name characters.
//!
//! ## Example
//!
//! ```rust
//! use uriroute::template::{RouteTemplate, Segment};
//!
//! let template = RouteTemplate::parse("(<controller>(/<action>(/<id>)))").unwrap();
//! assert_eq!(template.placeholders(), ["controller", "action", "id"]);
//! assert!(matches!(template.segments()[0], Segment::Optional(_)));
//! ```

mod parser;
#[cfg(test)]
mod tests;

pub use parser::{RouteTemplate, Segment, TemplateError, TemplateErrorKind};
