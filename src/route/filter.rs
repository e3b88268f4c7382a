use std::sync::Arc;

use super::definition::RouteDefinition;
use super::types::Params;

/// What a route filter decided about a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Reject the match; later filters do not run
    Veto,
    /// Replace the parameter map and continue
    Rewrite(Params),
    /// Leave the parameters as they are
    NoOpinion,
}

/// A post-match hook. Receives the route, the parameters resolved so far and
/// the slash-trimmed request path.
///
/// Filters run concurrently across requests and must not mutate shared state
/// without their own synchronisation.
pub type FilterFn = Arc<dyn Fn(&RouteDefinition, &Params, &str) -> FilterOutcome + Send + Sync>;

/// Normalises convention-carrying parameters after a match.
pub trait ParamCanonicalizer: Send + Sync {
    fn canonicalize(&self, params: &mut Params);
}

/// Rewrites `controller` and `directory` values to studly case with `_`
/// between words: `user_profile` and `user profile` both become
/// `User_Profile`. Characters other than the first of each word are kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct StudlyCase;

impl StudlyCase {
    const KEYS: [&'static str; 2] = ["directory", "controller"];

    #[must_use]
    pub fn apply(value: &str) -> String {
        let mut out = String::with_capacity(value.len());
        let mut word_start = true;
        for ch in value.chars() {
            if ch == '_' || ch == ' ' {
                out.push('_');
                word_start = true;
            } else if word_start {
                out.extend(ch.to_uppercase());
                word_start = false;
            } else {
                out.push(ch);
            }
        }
        out
    }
}

impl ParamCanonicalizer for StudlyCase {
    fn canonicalize(&self, params: &mut Params) {
        for key in Self::KEYS {
            if let Some(value) = params.get_mut(key) {
                *value = StudlyCase::apply(value);
            }
        }
    }
}
