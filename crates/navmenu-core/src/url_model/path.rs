//! Path normalization for active-link comparison.

use url::Url;

/// Base that relative inputs (`/shop`, `about/`, `//cdn.test/x`) are joined
/// onto before parsing. Only the path of the result is ever used.
const RELATIVE_BASE: &str = "http://localhost/";

/// Parses an absolute or relative URL.
///
/// Returns `None` only when the input cannot be parsed even relative to a
/// base (e.g. an invalid host).
pub(crate) fn parse_url(input: &str) -> Option<Url> {
    let input = input.trim();
    match Url::parse(input) {
        Ok(parsed) => Some(parsed),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(RELATIVE_BASE).ok()?.join(input).ok()
        }
        Err(_) => None,
    }
}

/// Reduces a URL (absolute or relative) to a comparable path.
///
/// Query string, fragment, scheme and host are dropped, the path is
/// percent-encoded, trailing slashes are stripped and the root path becomes
/// the empty string. Non-empty results always start with `/`.
pub fn normalize_path(url: &str) -> Option<String> {
    let parsed = parse_url(url)?;
    let trimmed = parsed.path().trim_end_matches('/');
    Some(if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    })
}
