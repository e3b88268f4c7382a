use std::fmt;

use crate::template::TemplateError;

/// Errors raised by route construction and reverse generation.
///
/// A path that no route accepts is not an error: matching and dispatch
/// return `None` so a table can be probed speculatively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The route template is malformed.
    Template(TemplateError),
    /// A per-parameter constraint does not compile as a regex fragment.
    InvalidConstraint {
        /// Placeholder the constraint was attached to
        param: String,
        /// The offending fragment
        pattern: String,
        /// Message reported by the regex compiler
        reason: String,
    },
    /// The assembled pattern for a template was rejected by the regex engine.
    InvalidPattern {
        /// Template the pattern was built from
        template: String,
        /// Message reported by the regex compiler
        reason: String,
    },
    /// A placeholder required by the generated path has neither a supplied
    /// value nor a default.
    MissingParameter {
        /// Name of the first unresolvable placeholder in template order
        param: String,
    },
    /// No route is registered under the requested name.
    UnknownRoute {
        /// The name that was looked up
        name: String,
    },
}

impl RouteError {
    /// Shorthand used by the generator.
    pub(crate) fn missing(param: impl Into<String>) -> Self {
        RouteError::MissingParameter {
            param: param.into(),
        }
    }
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Template(err) => write!(f, "invalid route template: {}", err),
            RouteError::InvalidConstraint {
                param,
                pattern,
                reason,
            } => write!(
                f,
                "invalid constraint for route parameter '{}' ({}): {}",
                param, pattern, reason
            ),
            RouteError::InvalidPattern { template, reason } => {
                write!(f, "cannot compile route '{}': {}", template, reason)
            }
            RouteError::MissingParameter { param } => {
                write!(f, "required route parameter not passed: {}", param)
            }
            RouteError::UnknownRoute { name } => {
                write!(f, "the requested route does not exist: {}", name)
            }
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouteError::Template(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TemplateError> for RouteError {
    fn from(err: TemplateError) -> Self {
        RouteError::Template(err)
    }
}
