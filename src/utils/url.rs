//! URL encoding for routes.
//!
//! Maps a route and its query parameters to a browser URL and back:
//! `/` for the home route, `/<slug>` otherwise, followed by `?key=value&...`
//! with every key and value percent-encoded. The query string is omitted
//! when there are no parameters.

use std::borrow::Cow;

use crate::models::{Route, RouteParams};

/// Build the browser URL for a route.
pub fn build_url(route: Route, params: &RouteParams) -> String {
    let path = route.path();
    let query = build_query(params);
    if query.is_empty() {
        path
    } else {
        format!("{}?{}", path, query)
    }
}

/// Encode parameters as `key=value` pairs joined by `&` (no leading `?`).
pub fn build_query(params: &RouteParams) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a query string, with or without its leading `?`.
///
/// Empty pairs are skipped; a key without `=` maps to an empty value and
/// `+` decodes to a space, matching `URLSearchParams`.
pub fn parse_query(query: &str) -> RouteParams {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// Resolve a route and parameters from a URL path and query string.
pub fn parse_location(path: &str, query: &str) -> (Route, RouteParams) {
    (Route::from_path(path), parse_query(query))
}

fn decode_component(raw: &str) -> String {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        // Malformed UTF-8 escapes are kept verbatim
        Err(_) => spaced.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> RouteParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn parse_url(url: &str) -> (Route, RouteParams) {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        parse_location(path, query)
    }

    #[test]
    fn test_build_url() {
        assert_eq!(build_url(Route::Home, &RouteParams::new()), "/");
        assert_eq!(build_url(Route::Settings, &RouteParams::new()), "/settings");
        assert_eq!(
            build_url(Route::Wallet, &params(&[("tab", "send")])),
            "/wallet?tab=send"
        );
        assert_eq!(
            build_url(Route::Home, &params(&[("ref", "x")])),
            "/?ref=x"
        );
    }

    #[test]
    fn test_wallet_url_round_trip() {
        let original = params(&[("tab", "send")]);
        let url = build_url(Route::Wallet, &original);
        assert_eq!(parse_url(&url), (Route::Wallet, original));
    }

    #[test]
    fn test_percent_encoding() {
        let p = params(&[("memo", "hello world&more"), ("to", "T9yD=?")]);
        let url = build_url(Route::Exchange, &p);
        assert_eq!(
            url,
            "/exchange?memo=hello%20world%26more&to=T9yD%3D%3F"
        );
        assert_eq!(parse_url(&url), (Route::Exchange, p));
    }

    #[test]
    fn test_parse_query_edge_cases() {
        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());
        assert_eq!(parse_query("?a=1&&b"), params(&[("a", "1"), ("b", "")]));
        assert_eq!(parse_query("q=a+b"), params(&[("q", "a b")]));
        assert_eq!(parse_query("=orphan"), RouteParams::new());
        // Invalid UTF-8 escape is kept as-is
        assert_eq!(parse_query("x=%FF"), params(&[("x", "%FF")]));
    }

    #[test]
    fn test_parse_location() {
        assert_eq!(
            parse_location("/", "?tab=receive"),
            (Route::Home, params(&[("tab", "receive")]))
        );
        assert_eq!(
            parse_location("/missing", ""),
            (Route::NotFound, RouteParams::new())
        );
    }
}
