//! Reverse routing: build a concrete path from a template and a parameter set.
//!
//! The walk runs over the template's syntax tree, never over the compiled
//! regex. Each span reports whether it is *required*, meaning it holds a
//! placeholder whose value differs from its default (or has no default at
//! all). An optional group that is not required collapses to nothing, and a
//! required group forces every enclosing group to render too.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{Defaults, Params};
use crate::error::RouteError;
use crate::template::{RouteTemplate, Segment};

#[allow(clippy::expect_used)]
static REPEATED_SLASHES: Lazy<Regex> =
    Lazy::new(|| Regex::new("/{2,}").expect("static slash regex must compile"));

/// Output of rendering one span of the template.
struct Rendered<'a> {
    text: String,
    required: bool,
    /// First placeholder, in template order, that had no value
    missing: Option<&'a str>,
}

/// Generates paths from route templates.
pub struct UriGenerator;

impl UriGenerator {
    /// Render `template` with `params`, falling back to `defaults`.
    ///
    /// Runs of `/` are collapsed and a trailing `/` is dropped. Host handling
    /// for external routes lives in [`crate::route::RouteDefinition::uri`].
    ///
    /// # Errors
    ///
    /// [`RouteError::MissingParameter`] naming the first placeholder that must
    /// be rendered but has neither a supplied value nor a default.
    pub fn generate(
        template: &RouteTemplate,
        defaults: &Defaults,
        params: &Params,
    ) -> Result<String, RouteError> {
        let rendered = render(template.segments(), defaults, params, true);
        if let Some(param) = rendered.missing {
            return Err(RouteError::missing(param));
        }
        Ok(normalize(&rendered.text))
    }
}

fn render<'a>(
    segments: &'a [Segment],
    defaults: &Defaults,
    params: &Params,
    required: bool,
) -> Rendered<'a> {
    let mut out = Rendered {
        text: String::new(),
        required,
        missing: None,
    };

    for segment in segments {
        match segment {
            Segment::Literal(text) => out.text.push_str(text),
            Segment::Placeholder(name) => {
                let default = defaults.get(name);
                if let Some(value) = params.get(name) {
                    if default != Some(value.as_str()) {
                        out.required = true;
                    }
                    out.text.push_str(value);
                } else if let Some(value) = default {
                    out.text.push_str(value);
                } else if out.missing.is_none() {
                    out.missing = Some(name);
                }
            }
            Segment::Optional(inner) => {
                let group = render(inner, defaults, params, false);
                if group.required {
                    out.required = true;
                    out.text.push_str(&group.text);
                    if out.missing.is_none() {
                        out.missing = group.missing;
                    }
                }
            }
        }
    }

    // A span that ends up omitted cannot be missing anything.
    if !out.required {
        out.missing = None;
    }
    out
}

fn normalize(path: &str) -> String {
    let collapsed = REPEATED_SLASHES.replace_all(path, "/");
    match collapsed.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => collapsed.into_owned(),
    }
}
