//! Template to regex compilation.
//!
//! Literal text is escaped, optional groups become `(?:...)?`, and every
//! placeholder becomes a named capture group. Capture groups are named
//! `p0`, `p1`, ... rather than after the placeholder so that any placeholder
//! name is legal and so that capture groups inside a constraint fragment
//! cannot shift the mapping.

use regex::Regex;

use super::types::{Constraints, Params};
use crate::error::RouteError;
use crate::template::{RouteTemplate, Segment};

/// Pattern used for placeholders without a constraint: one or more
/// characters other than `/ . , ; ?` and newline.
pub const DEFAULT_SEGMENT: &str = r"[^/.,;?\n]+";

/// An anchored matcher derived from a template and its constraints.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    /// `(group name, placeholder name)` in template order
    groups: Vec<(String, String)>,
}

impl CompiledPattern {
    /// Match a whole path and return the captured placeholder values.
    ///
    /// Placeholders inside an optional group that did not participate in the
    /// match are absent from the result.
    #[must_use]
    pub fn captures(&self, path: &str) -> Option<Params> {
        let caps = self.regex.captures(path)?;
        let params = self
            .groups
            .iter()
            .filter_map(|(group, name)| {
                caps.name(group)
                    .map(|m| (name.clone(), m.as_str().to_string()))
            })
            .collect();
        Some(params)
    }

    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// The generated regex source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Compiles route templates into [`CompiledPattern`]s.
pub struct PatternCompiler;

impl PatternCompiler {
    /// Compile `template`, using `constraints[name]` in place of
    /// [`DEFAULT_SEGMENT`] for each constrained placeholder. Constraints for
    /// names the template does not contain are ignored.
    ///
    /// # Errors
    ///
    /// [`RouteError::InvalidConstraint`] when a fragment is not a valid regex,
    /// [`RouteError::InvalidPattern`] when the assembled regex is rejected
    /// (for example because it exceeds the regex size limit).
    pub fn compile(
        template: &RouteTemplate,
        constraints: &Constraints,
    ) -> Result<CompiledPattern, RouteError> {
        let mut body = String::with_capacity(template.as_str().len() * 2);
        let mut groups = Vec::with_capacity(template.placeholders().len());
        write_segments(template.segments(), constraints, &mut groups, &mut body)?;

        let source = format!("^{}$", body);
        let regex = Regex::new(&source).map_err(|e| RouteError::InvalidPattern {
            template: template.as_str().to_string(),
            reason: e.to_string(),
        })?;
        Ok(CompiledPattern { regex, groups })
    }

    /// Compile a template string directly.
    ///
    /// # Errors
    ///
    /// Any template parse error, plus the errors of [`PatternCompiler::compile`].
    pub fn compile_str(
        template: &str,
        constraints: &Constraints,
    ) -> Result<CompiledPattern, RouteError> {
        let template = RouteTemplate::parse(template)?;
        Self::compile(&template, constraints)
    }
}

fn write_segments(
    segments: &[Segment],
    constraints: &Constraints,
    groups: &mut Vec<(String, String)>,
    out: &mut String,
) -> Result<(), RouteError> {
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(&regex::escape(text)),
            Segment::Placeholder(name) => {
                let fragment = match constraints.get(name) {
                    Some(fragment) => {
                        check_fragment(name, fragment)?;
                        fragment.as_str()
                    }
                    None => DEFAULT_SEGMENT,
                };
                let group = format!("p{}", groups.len());
                out.push_str("(?P<");
                out.push_str(&group);
                out.push_str(">(?:");
                out.push_str(fragment);
                out.push_str("))");
                groups.push((group, name.clone()));
            }
            Segment::Optional(inner) => {
                out.push_str("(?:");
                write_segments(inner, constraints, groups, out)?;
                out.push_str(")?");
            }
        }
    }
    Ok(())
}

/// A fragment must compile on its own, which also guarantees its
/// parentheses balance and it cannot close the group it is placed in.
fn check_fragment(param: &str, fragment: &str) -> Result<(), RouteError> {
    Regex::new(fragment)
        .map(|_| ())
        .map_err(|e| RouteError::InvalidConstraint {
            param: param.to_string(),
            pattern: fragment.to_string(),
            reason: e.to_string(),
        })
}
