//! Route resolution.
//!
//! Traversal is declaration order, first structural match wins. Method
//! agreement is checked only after a structural match, and a disagreement
//! halts the traversal: the first route whose shape matches the path is
//! authoritative for method checking, even when a later route would have
//! matched both path and method. Two routes with the same pattern and
//! different methods therefore shadow each other: the second is
//! unreachable.
//!
//! The matcher is stateless. Patterns are compiled on every attempt; nothing
//! is memoized across requests, so concurrent requests never share mutable
//! state.

use tracing::warn;

use crate::pattern;
use crate::route::Route;

/// Outcome of resolving a path + method against the route table.
pub(crate) enum MatchResult<'r> {
    /// A route matched structurally and by method. Captures are in
    /// left-to-right pattern order.
    Resolved {
        route: &'r Route,
        params: Vec<String>,
    },
    /// The first structurally matching route disagreed on method.
    MethodConflict,
    /// No route matched structurally.
    NoMatch,
}

/// Resolves `path` + `method` against `routes` in declaration order.
///
/// `method` is the raw verb from the request line (uppercase on the wire);
/// comparison against the route's declared method ignores case.
pub(crate) fn resolve<'r>(routes: &'r [Route], path: &str, method: &str) -> MatchResult<'r> {
    for route in routes {
        let regex = match pattern::compile(route.pattern()) {
            Ok(regex) => regex,
            Err(e) => {
                warn!(pattern = %route.pattern(), "skipping uncompilable route pattern: {e}");
                continue;
            }
        };

        let Some(captures) = regex.captures(path) else {
            continue;
        };

        if !route.method().as_str().eq_ignore_ascii_case(method) {
            return MatchResult::MethodConflict;
        }

        let params = captures
            .iter()
            .skip(1)
            .map(|capture| capture.map_or_else(String::new, |m| m.as_str().to_owned()))
            .collect();

        return MatchResult::Resolved { route, params };
    }

    MatchResult::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Body;
    use crate::envelope::Envelope;
    use crate::method::Method;

    fn ok(_: &Body, _: &[String]) -> Envelope {
        Envelope::message("ok")
    }

    fn resolved<'r>(result: MatchResult<'r>) -> (&'r Route, Vec<String>) {
        match result {
            MatchResult::Resolved { route, params } => (route, params),
            MatchResult::MethodConflict => panic!("unexpected method conflict"),
            MatchResult::NoMatch => panic!("unexpected no-match"),
        }
    }

    #[test]
    fn empty_route_list_never_matches() {
        assert!(matches!(resolve(&[], "/", "GET"), MatchResult::NoMatch));
    }

    #[test]
    fn literal_routes_capture_nothing() {
        let routes = [Route::new(Method::Get, "/about", ok)];
        let (route, params) = resolved(resolve(&routes, "/about", "GET"));
        assert_eq!(route.pattern(), "/about");
        assert!(params.is_empty());
    }

    #[test]
    fn captures_arrive_in_pattern_order() {
        let routes = [Route::new(Method::Get, "/api/(:any)/(:num)", ok)];
        let (_, params) = resolved(resolve(&routes, "/api/widget/42", "GET"));
        assert_eq!(params, ["widget", "42"]);
    }

    #[test]
    fn structural_misses_fall_through_to_later_routes() {
        let routes = [
            Route::new(Method::Get, "/api/(:num)", ok),
            Route::new(Method::Get, "/api/(:alpha)", ok),
        ];
        let (route, params) = resolved(resolve(&routes, "/api/abc", "GET"));
        assert_eq!(route.pattern(), "/api/(:alpha)");
        assert_eq!(params, ["abc"]);
    }

    #[test]
    fn first_structural_match_wins_regardless_of_specificity() {
        let routes = [
            Route::new(Method::Get, "/files/(:all)", ok),
            Route::new(Method::Get, "/files/(:num)", ok),
        ];
        let (route, _) = resolved(resolve(&routes, "/files/42", "GET"));
        assert_eq!(route.pattern(), "/files/(:all)");
    }

    #[test]
    fn method_conflict_halts_the_traversal() {
        // The POST route matches "/thing" structurally first, so the GET
        // route below it is unreachable for GET requests.
        let routes = [
            Route::new(Method::Post, "/thing", ok),
            Route::new(Method::Get, "/thing", ok),
        ];
        assert!(matches!(
            resolve(&routes, "/thing", "GET"),
            MatchResult::MethodConflict
        ));
    }

    #[test]
    fn unknown_request_verbs_reach_the_conflict_path() {
        let routes = [Route::new(Method::Get, "/", ok)];
        assert!(matches!(
            resolve(&routes, "/", "BREW"),
            MatchResult::MethodConflict
        ));
    }

    #[test]
    fn method_comparison_ignores_case() {
        let routes = [Route::new(Method::Get, "/", ok)];
        assert!(matches!(
            resolve(&routes, "/", "get"),
            MatchResult::Resolved { .. }
        ));
    }

    #[test]
    fn uncompilable_patterns_are_skipped() {
        let routes = [
            Route::new(Method::Get, "/broken/((", ok),
            Route::new(Method::Get, "/ok", ok),
        ];
        let (route, _) = resolved(resolve(&routes, "/ok", "GET"));
        assert_eq!(route.pattern(), "/ok");
    }

    #[test]
    fn catch_all_captures_the_empty_string() {
        let routes = [Route::new(Method::Get, "/files/(:all)", ok)];
        let (_, params) = resolved(resolve(&routes, "/files/", "GET"));
        assert_eq!(params, [""]);
    }
}
