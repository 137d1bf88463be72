//! CORS header module
//!
//! The front-end is frequently served from a different origin during
//! development (e.g. a bundler dev server proxying to this one), so every
//! response carries the same permissive header set.

use hyper::header::HeaderValue;
use hyper::HeaderMap;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Append the CORS headers to a response, replacing any existing values
pub fn apply(headers: &mut HeaderMap) {
    headers.insert(
        "Access-Control-Allow-Origin",
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_sets_all_three_headers() {
        let mut headers = HeaderMap::new();
        apply(&mut headers);
        assert_eq!(headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(headers["Access-Control-Allow-Methods"], "GET, POST, OPTIONS");
        assert_eq!(
            headers["Access-Control-Allow-Headers"],
            "Content-Type, Authorization"
        );
    }

    #[test]
    fn test_apply_replaces_existing_values() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Access-Control-Allow-Origin",
            HeaderValue::from_static("https://example.com"),
        );
        apply(&mut headers);
        assert_eq!(headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(
            headers
                .get_all("Access-Control-Allow-Origin")
                .iter()
                .count(),
            1
        );
    }
}
