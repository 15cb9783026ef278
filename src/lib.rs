//! # ruta
//!
//! A minimal pattern-matching HTTP router for JSON services.
//! Nothing more. Nothing less.
//!
//! ## The contract
//!
//! Routes are an ordered list of patterns. A pattern is a literal path with
//! typed wildcard tokens; each token compiles to one regex capture, and the
//! captures arrive at the handler positionally, left to right. The first
//! route whose pattern matches the path wins — including for method
//! checking: if that route's method disagrees with the request, the answer
//! is `405` and no later route is tried. Declaration order *is* the routing
//! policy.
//!
//! Every response is a JSON envelope: a `message`, an optional `status`
//! (200 when absent), and whatever else the handler adds.
//!
//! | token | matches |
//! |---|---|
//! | `(:num)` | optional leading minus, one or more digits |
//! | `(:alpha)` | one or more ASCII letters |
//! | `(:alphanum)` | one or more ASCII letters or digits |
//! | `(:any)` | one segment of letters, digits and common punctuation |
//! | `(:all)` | anything, including the empty string |
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use ruta::{Body, Envelope, Router, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = Router::new()
//!         .get("/", home)
//!         .get("/api/(:any)/(:num)", show);
//!
//!     Server::bind("0.0.0.0:3000").serve(app).await.unwrap();
//! }
//!
//! fn home(_body: &Body, _params: &[String]) -> Envelope {
//!     Envelope::message("Hi There!")
//! }
//!
//! fn show(_body: &Body, params: &[String]) -> Envelope {
//!     let [class, id] = params else {
//!         return Envelope::message("Page not found").status(404);
//!     };
//!     Envelope::message(format!("You are viewing {class} API with id {id}"))
//! }
//! ```
//!
//! Handlers are plain synchronous functions: by the time one runs, the body
//! has been collected and resolution is pure computation. Handlers that
//! consume input data call [`Body::data`], which applies a fixed precedence:
//! non-empty form data first, then the raw body as JSON, then an empty
//! mapping.

mod body;
mod dispatch;
mod envelope;
mod error;
mod handler;
mod matcher;
mod method;
mod route;
mod server;

pub mod pattern;
pub mod wildcard;

pub use body::Body;
pub use dispatch::dispatch;
pub use envelope::{Envelope, IntoEnvelope};
pub use error::Error;
pub use handler::Handler;
pub use method::Method;
pub use route::{Route, Router};
pub use server::Server;
