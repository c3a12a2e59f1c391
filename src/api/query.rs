// Query-string parameter extraction

use std::collections::HashMap;

/// Decodes a raw query string into a parameter map.
///
/// Percent-encoding and `+` are handled by `form_urlencoded`; when a key
/// repeats, the last occurrence wins.
pub fn parse(query: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}
