//! The uniform JSON response envelope.
//!
//! Every resolution path produces an [`Envelope`]: handlers build one for
//! success, the dispatcher builds the standard not-found and
//! method-not-allowed ones. An envelope is a JSON object carrying at least a
//! `message`, optionally a `status` integer (200 when absent), and whatever
//! else the handler adds.
//!
//! ```rust
//! use ruta::Envelope;
//!
//! Envelope::message("Hi There!");
//! Envelope::message("Method not allowed").status(405);
//! Envelope::message("Post data").field("data", serde_json::json!({"x": 1}));
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

/// The response envelope. Serializes transparently as its JSON object.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Envelope {
    fields: Map<String, Value>,
}

impl Envelope {
    /// Envelope with a `message` field, the usual starting point.
    pub fn message(text: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("message".to_owned(), Value::String(text.into()));
        Self { fields }
    }

    /// Sets the `status` field. Leave it unset for 200.
    pub fn status(mut self, code: u16) -> Self {
        self.fields.insert("status".to_owned(), Value::from(code));
        self
    }

    /// Adds an arbitrary data field.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// The HTTP status to respond with: the `status` field, or 200.
    pub fn status_code(&self) -> u16 {
        self.fields
            .get("status")
            .and_then(Value::as_u64)
            .and_then(|code| u16::try_from(code).ok())
            .unwrap_or(200)
    }

    /// Reads a field back.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

// ── IntoEnvelope ──────────────────────────────────────────────────────────────

/// Conversion into an [`Envelope`].
///
/// Lets a handler return a bare string for a message-only response:
///
/// ```rust
/// # use ruta::{Body, Envelope};
/// fn ping(_body: &Body, _params: &[String]) -> &'static str {
///     "pong"
/// }
/// ```
pub trait IntoEnvelope {
    fn into_envelope(self) -> Envelope;
}

impl IntoEnvelope for Envelope {
    fn into_envelope(self) -> Envelope {
        self
    }
}

impl IntoEnvelope for &'static str {
    fn into_envelope(self) -> Envelope {
        Envelope::message(self)
    }
}

impl IntoEnvelope for String {
    fn into_envelope(self) -> Envelope {
        Envelope::message(self)
    }
}
