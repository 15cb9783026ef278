//! Route table.
//!
//! Routes live in a plain `Vec`, in declaration order: no sorting, no
//! specificity ranking. Order is load-bearing: the first route whose pattern
//! matches the path structurally is authoritative, including for method
//! checking (see the matcher). Build the table once at startup; it is
//! read-only at request time.

use crate::body::Body;
use crate::envelope::Envelope;
use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::pattern;

/// A single route: pattern, method and handler.
pub struct Route {
    pattern: String,
    method: Method,
    handler: BoxedHandler,
}

impl Route {
    /// Builds a route without validating the pattern; [`Router`] registration
    /// is the validating entry point. A route whose pattern does not compile
    /// is skipped at match time with a warning.
    pub fn new(method: Method, pattern: &str, handler: impl Handler) -> Self {
        Self {
            pattern: pattern.to_owned(),
            method,
            handler: handler.into_boxed_handler(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub(crate) fn call(&self, body: &Body, params: &[String]) -> Envelope {
        self.handler.call(body, params)
    }
}

/// The application router: an ordered route list.
///
/// Each registration returns `self` so declarations chain naturally:
///
/// ```rust,no_run
/// # use ruta::{Body, Envelope, Router};
/// # fn home(_: &Body, _: &[String]) -> Envelope { Envelope::message("") }
/// # fn post_data(_: &Body, _: &[String]) -> Envelope { Envelope::message("") }
/// # fn show(_: &Body, _: &[String]) -> Envelope { Envelope::message("") }
/// Router::new()
///     .get("/", home)
///     .post("/api", post_data)
///     .get("/api/(:any)/(:num)", show);
/// ```
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registers a handler for a method + pattern pair. Returns `self` for
    /// chaining.
    ///
    /// # Panics
    ///
    /// Panics if the pattern does not compile, so a broken route table fails
    /// at startup instead of matching silently wrong at request time.
    pub fn on(mut self, method: Method, pattern: &str, handler: impl Handler) -> Self {
        pattern::compile(pattern)
            .unwrap_or_else(|e| panic!("invalid route pattern `{pattern}`: {e}"));
        self.routes.push(Route::new(method, pattern, handler));
        self
    }

    /// Registers a GET route (the default method).
    pub fn get(self, pattern: &str, handler: impl Handler) -> Self {
        self.on(Method::Get, pattern, handler)
    }

    /// Registers a POST route.
    pub fn post(self, pattern: &str, handler: impl Handler) -> Self {
        self.on(Method::Post, pattern, handler)
    }

    /// Registers a DELETE route.
    pub fn delete(self, pattern: &str, handler: impl Handler) -> Self {
        self.on(Method::Delete, pattern, handler)
    }

    /// The declared routes, in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::Envelope;

    fn ok(_: &Body, _: &[String]) -> Envelope {
        Envelope::message("ok")
    }

    #[test]
    fn registration_preserves_declaration_order() {
        let router = Router::new()
            .get("/b", ok)
            .get("/a", ok)
            .post("/a", ok);

        let patterns: Vec<_> = router.routes().iter().map(Route::pattern).collect();
        assert_eq!(patterns, ["/b", "/a", "/a"]);
        assert_eq!(router.routes()[2].method(), Method::Post);
    }

    #[test]
    #[should_panic(expected = "invalid route pattern")]
    fn invalid_patterns_fail_registration() {
        let _ = Router::new().get("/broken/((", ok);
    }
}
