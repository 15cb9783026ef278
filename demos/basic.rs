//! Minimal ruta example — three JSON endpoints.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example basic
//!
//! Try:
//!   curl http://localhost:3000/
//!   curl -X POST http://localhost:3000/api \
//!        -H 'content-type: application/json' \
//!        -d '{"x":1}'
//!   curl http://localhost:3000/api/user/7
//!   curl -X DELETE http://localhost:3000/

use ruta::{Body, Envelope, Router, Server};
use serde_json::Value;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let app = Router::new()
        .get("/", home)
        .post("/api", post_data)
        .get("/api/(:any)/(:num)", show_resource);

    Server::bind("0.0.0.0:3000")
        .serve(app)
        .await
        .expect("server error");
}

// GET /
fn home(_body: &Body, _params: &[String]) -> Envelope {
    Envelope::message("Hi There!")
}

// POST /api
//
// body.data() applies the extraction precedence: non-empty form data first,
// then the raw body as JSON, then an empty mapping.
fn post_data(body: &Body, _params: &[String]) -> Envelope {
    Envelope::message("Post data").field("data", Value::Object(body.data()))
}

// GET /api/(:any)/(:num)
fn show_resource(_body: &Body, params: &[String]) -> Envelope {
    let [class, id] = params else {
        return Envelope::message("Page not found").status(404);
    };
    Envelope::message(format!("You are viewing {class} API with id {id}"))
}
