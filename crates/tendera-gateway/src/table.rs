//! Route table: external paths mapped to backend services.
//!
//! Routes are registered once at startup. Matching requires an exact method
//! match and a segment-wise path match; a single integer path parameter per
//! route (e.g. `{id}`) is supported and substituted into the target path.

use axum::http::Method;

/// A single entry in the route table.
#[derive(Debug, Clone)]
pub struct Route {
    method: Method,
    pattern: String,
    service: String,
    target: String,
    requires_auth: bool,
}

impl Route {
    /// Create a public route (no credential required).
    #[must_use]
    pub fn public(
        method: Method,
        pattern: impl Into<String>,
        service: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            method,
            pattern: pattern.into(),
            service: service.into(),
            target: target.into(),
            requires_auth: false,
        }
    }

    /// Create a protected route (credential required before proxying).
    #[must_use]
    pub fn protected(
        method: Method,
        pattern: impl Into<String>,
        service: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            requires_auth: true,
            ..Self::public(method, pattern, service, target)
        }
    }

    /// The logical name of the target service.
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Whether a validated credential is required before dispatch.
    #[must_use]
    pub const fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    /// Match this route against a request path, returning the resolved target
    /// path on success.
    ///
    /// A `{param}` segment matches only an integer path segment, which is
    /// substituted into the target template.
    fn match_path(&self, path: &str) -> Option<String> {
        let pattern_segments: Vec<&str> = segments(&self.pattern);
        let path_segments: Vec<&str> = segments(path);

        if pattern_segments.len() != path_segments.len() {
            return None;
        }

        let mut target = self.target.clone();
        for (pattern_segment, path_segment) in pattern_segments.iter().zip(&path_segments) {
            if is_param(pattern_segment) {
                path_segment.parse::<i64>().ok()?;
                target = target.replace(pattern_segment, path_segment);
            } else if pattern_segment != path_segment {
                return None;
            }
        }

        Some(target)
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.strip_prefix('/').unwrap_or(path).split('/').collect()
}

fn is_param(segment: &str) -> bool {
    segment.starts_with('{') && segment.ends_with('}')
}

/// A successful route-table lookup.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    /// The matched route.
    pub route: &'a Route,
    /// The backend path with path parameters substituted.
    pub target_path: String,
}

/// The fixed set of externally routable endpoints.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Create a route table from the given routes.
    ///
    /// Insertion order does not affect matching; each `(method, pattern)` pair
    /// is expected to be unique.
    #[must_use]
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// The external API surface of the gateway.
    #[must_use]
    pub fn api_default() -> Self {
        Self::new(vec![
            // Auth (public)
            Route::public(Method::POST, "/api/auth/register", "auth", "auth/register"),
            Route::public(Method::POST, "/api/auth/login", "auth", "auth/login"),
            Route::public(Method::POST, "/api/auth/verify", "auth", "auth/verify"),
            // Tenders
            Route::public(Method::GET, "/api/tenders", "tenders", "tenders"),
            Route::public(Method::GET, "/api/tenders/{id}", "tenders", "tenders/{id}"),
            Route::protected(Method::POST, "/api/tenders", "tenders", "tenders"),
            Route::protected(
                Method::POST,
                "/api/tenders/{id}/applications",
                "tenders",
                "tenders/{id}/applications",
            ),
            // Users (all protected)
            Route::protected(Method::GET, "/api/users/profile", "users", "users/profile"),
            Route::protected(Method::PUT, "/api/users/profile", "users", "users/profile"),
            Route::protected(Method::GET, "/api/users/list", "users", "users/list"),
        ])
    }

    /// Find the route matching the given method and path.
    #[must_use]
    pub fn match_route(&self, method: &Method, path: &str) -> Option<RouteMatch<'_>> {
        self.routes
            .iter()
            .filter(|route| route.method == *method)
            .find_map(|route| {
                route.match_path(path).map(|target_path| RouteMatch {
                    route,
                    target_path,
                })
            })
    }

    /// Number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_path() {
        let table = RouteTable::api_default();

        let matched = table.match_route(&Method::GET, "/api/tenders").unwrap();
        assert_eq!(matched.route.service(), "tenders");
        assert_eq!(matched.target_path, "tenders");
        assert!(!matched.route.requires_auth());
    }

    #[test]
    fn substitutes_integer_parameter() {
        let table = RouteTable::api_default();

        let matched = table.match_route(&Method::GET, "/api/tenders/42").unwrap();
        assert_eq!(matched.target_path, "tenders/42");

        let matched = table
            .match_route(&Method::POST, "/api/tenders/7/applications")
            .unwrap();
        assert_eq!(matched.target_path, "tenders/7/applications");
        assert!(matched.route.requires_auth());
    }

    #[test]
    fn rejects_non_integer_parameter() {
        let table = RouteTable::api_default();
        assert!(table.match_route(&Method::GET, "/api/tenders/abc").is_none());
    }

    #[test]
    fn method_must_match_exactly() {
        let table = RouteTable::api_default();

        // GET and POST on /api/tenders resolve to different routes
        let get = table.match_route(&Method::GET, "/api/tenders").unwrap();
        let post = table.match_route(&Method::POST, "/api/tenders").unwrap();
        assert!(!get.route.requires_auth());
        assert!(post.route.requires_auth());

        assert!(table.match_route(&Method::DELETE, "/api/tenders").is_none());
    }

    #[test]
    fn unknown_path_does_not_match() {
        let table = RouteTable::api_default();
        assert!(table.match_route(&Method::GET, "/api/unknown").is_none());
        assert!(table.match_route(&Method::GET, "/api/tenders/1/extra").is_none());
    }

    #[test]
    fn trailing_slash_does_not_match() {
        let table = RouteTable::api_default();
        assert!(table.match_route(&Method::GET, "/api/tenders/").is_none());
    }

    #[test]
    fn insertion_order_is_irrelevant() {
        let forward = RouteTable::new(vec![
            Route::public(Method::GET, "/api/tenders", "tenders", "tenders"),
            Route::public(Method::GET, "/api/tenders/{id}", "tenders", "tenders/{id}"),
        ]);
        let reversed = RouteTable::new(vec![
            Route::public(Method::GET, "/api/tenders/{id}", "tenders", "tenders/{id}"),
            Route::public(Method::GET, "/api/tenders", "tenders", "tenders"),
        ]);

        for table in [&forward, &reversed] {
            assert_eq!(
                table
                    .match_route(&Method::GET, "/api/tenders")
                    .unwrap()
                    .target_path,
                "tenders"
            );
            assert_eq!(
                table
                    .match_route(&Method::GET, "/api/tenders/3")
                    .unwrap()
                    .target_path,
                "tenders/3"
            );
        }
    }

    #[test]
    fn protected_routes_carry_the_flag() {
        let table = RouteTable::api_default();

        for (method, path) in [
            (Method::GET, "/api/users/profile"),
            (Method::PUT, "/api/users/profile"),
            (Method::GET, "/api/users/list"),
            (Method::POST, "/api/tenders"),
        ] {
            let matched = table.match_route(&method, path).unwrap();
            assert!(matched.route.requires_auth(), "{method} {path}");
        }

        for (method, path) in [
            (Method::POST, "/api/auth/login"),
            (Method::GET, "/api/tenders"),
            (Method::GET, "/api/tenders/1"),
        ] {
            let matched = table.match_route(&method, path).unwrap();
            assert!(!matched.route.requires_auth(), "{method} {path}");
        }
    }
}
