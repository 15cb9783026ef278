//! Request dispatch.
//!
//! The dispatcher joins the matcher to the handlers: a resolved route is
//! invoked with the body capability and its captures, and the two failure
//! paths produce the standard envelopes. Handler output passes through
//! unchanged; a handler is trusted to return a well-formed envelope.

use crate::body::Body;
use crate::envelope::Envelope;
use crate::matcher::{self, MatchResult};
use crate::route::Route;

/// Resolves one request against `routes` and produces its envelope.
///
/// Every input yields an envelope; nothing on this path is fatal. The two
/// failure envelopes are fixed:
///
/// - no structural match → `{"message": "Page not found", "status": 404}`
/// - method conflict on the first structural match →
///   `{"message": "Method not allowed", "status": 405}`
pub fn dispatch(routes: &[Route], path: &str, method: &str, body: Body) -> Envelope {
    match matcher::resolve(routes, path, method) {
        MatchResult::Resolved { route, params } => route.call(&body, &params),
        MatchResult::MethodConflict => Envelope::message("Method not allowed").status(405),
        MatchResult::NoMatch => Envelope::message("Page not found").status(404),
    }
}
