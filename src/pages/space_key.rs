//! Space key resolution for the settings page.
//!
//! Candidates are tried in order; the first one that is present and not
//! blank wins. `spaceKey` always beats `projectKey`.

use super::extractors::RequestParameters;

pub const UNKNOWN_SPACE_KEY: &str = "Unknown";

type Candidate = fn(&RequestParameters) -> Option<&str>;

const CANDIDATES: [Candidate; 2] = [
    |params| params.get("spaceKey"),
    |params| params.get("projectKey"),
];

/// Resolves the space key, returning the trimmed value or `"Unknown"`.
pub fn resolve_space_key(params: &RequestParameters) -> String {
    first_non_blank(params, &CANDIDATES)
        .unwrap_or(UNKNOWN_SPACE_KEY)
        .to_string()
}

fn first_non_blank<'a>(params: &'a RequestParameters, candidates: &[Candidate]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|extract| extract(params))
        .map(str::trim)
        .find(|value| !value.is_empty())
}
