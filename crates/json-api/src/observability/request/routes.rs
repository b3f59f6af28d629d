//! Route labels for request metrics.

const KNOWN_ROUTES: &[&str] = &["/product", "/healthcheck", "/docs", "/api-doc/openapi.json"];

/// Collapse a request path onto a bounded set of metric labels.
pub(super) fn metric_route(path: &str) -> &'static str {
    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    KNOWN_ROUTES
        .iter()
        .find(|route| **route == trimmed)
        .copied()
        .unwrap_or("unmatched")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_routes_keep_their_path() {
        assert_eq!(metric_route("/product"), "/product");
        assert_eq!(metric_route("/product/"), "/product");
        assert_eq!(metric_route("/healthcheck"), "/healthcheck");
    }

    #[test]
    fn test_unknown_paths_share_one_label() {
        assert_eq!(metric_route("/"), "unmatched");
        assert_eq!(metric_route("/product/42"), "unmatched");
        assert_eq!(metric_route("/wp-admin"), "unmatched");
    }
}
