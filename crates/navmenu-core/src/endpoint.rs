//! Order-details route: the `nali-order` rewrite endpoint.
//!
//! The endpoint is registered at the site root and under pages, so both
//! `/nali-order/42` and `/my-account/nali-order/42` address order 42. With
//! plain permalinks the same value arrives as the `nali-order` query var.

use crate::url_model::parse_url;

/// Endpoint name used in paths and as the query var.
pub const ORDER_ENDPOINT: &str = "nali-order";

/// Extracts the order id addressed by `url`, if any.
///
/// The path form takes precedence over the query var. Ids must be positive
/// integers; anything else yields `None`.
pub fn parse_order_id(url: &str) -> Option<u64> {
    let parsed = parse_url(url)?;

    let from_path = parsed.path_segments().and_then(|mut segments| {
        segments
            .by_ref()
            .find(|segment| *segment == ORDER_ENDPOINT)?;
        segments.next().and_then(parse_id)
    });
    if from_path.is_some() {
        return from_path;
    }

    parsed
        .query_pairs()
        .find(|(key, _)| key == ORDER_ENDPOINT)
        .and_then(|(_, value)| parse_id(&value))
}

fn parse_id(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u64>().ok().filter(|id| *id > 0)
}
