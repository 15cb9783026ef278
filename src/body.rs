//! Request body extraction.
//!
//! Handlers that consume input data receive a [`Body`] capability. Extraction
//! follows a fixed precedence: non-empty form data wins; otherwise the raw
//! body is parsed as JSON; malformed JSON or a JSON value that is not an
//! object degrades to an empty mapping. A handler cannot distinguish
//! "no body" from "malformed body".
//!
//! The raw body is read exactly once. [`Body::data`] consumes it, and a
//! second call finds the stream exhausted. There is no caching; call it
//! once and keep the result.

use std::cell::Cell;

use bytes::Bytes;
use serde_json::{Map, Value};

/// Request-scoped input data, handed to handlers as an explicit capability.
pub struct Body {
    form: Map<String, Value>,
    raw: Cell<Option<Bytes>>,
}

impl Body {
    /// Builds the capability from what the transport supplies: the form
    /// mapping (empty unless the request was a form-encoded POST) and the
    /// raw body bytes.
    pub fn new(form: Map<String, Value>, raw: impl Into<Bytes>) -> Self {
        Self {
            form,
            raw: Cell::new(Some(raw.into())),
        }
    }

    /// A body with no input at all.
    pub fn empty() -> Self {
        Self::new(Map::new(), Bytes::new())
    }

    /// Extracts the request data as a JSON object.
    ///
    /// Consumes the raw body on the first call.
    pub fn data(&self) -> Map<String, Value> {
        if !self.form.is_empty() {
            return self.form.clone();
        }

        let raw = self.raw.take().unwrap_or_default();
        match serde_json::from_slice(&raw) {
            Ok(Value::Object(data)) => data,
            _ => Map::new(),
        }
    }
}

/// Normalizes an `application/x-www-form-urlencoded` body into a JSON object.
/// Percent-escapes are decoded; a key supplied twice keeps its last value.
pub(crate) fn parse_form(raw: &[u8]) -> Map<String, Value> {
    url::form_urlencoded::parse(raw)
        .into_owned()
        .map(|(key, value)| (key, Value::String(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(pairs: &[(&str, &str)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), Value::String((*v).to_owned())))
            .collect()
    }

    #[test]
    fn form_data_wins_over_a_json_body() {
        let body = Body::new(form(&[("a", "1")]), br#"{"b": 2}"#.to_vec());
        assert_eq!(Value::Object(body.data()), json!({"a": "1"}));
    }

    #[test]
    fn json_body_is_used_when_no_form_data_is_present() {
        let body = Body::new(Map::new(), br#"{"x": 1}"#.to_vec());
        assert_eq!(Value::Object(body.data()), json!({"x": 1}));
    }

    #[test]
    fn malformed_json_degrades_to_an_empty_mapping() {
        let body = Body::new(Map::new(), b"{not json".to_vec());
        assert!(body.data().is_empty());
    }

    #[test]
    fn non_object_json_degrades_to_an_empty_mapping() {
        assert!(Body::new(Map::new(), b"[1, 2, 3]".to_vec()).data().is_empty());
        assert!(Body::new(Map::new(), b"42".to_vec()).data().is_empty());
        assert!(Body::new(Map::new(), br#""text""#.to_vec()).data().is_empty());
    }

    #[test]
    fn raw_body_is_consumed_on_first_read() {
        let body = Body::new(Map::new(), br#"{"x": 1}"#.to_vec());
        assert_eq!(Value::Object(body.data()), json!({"x": 1}));
        assert!(body.data().is_empty());
    }

    #[test]
    fn form_data_survives_repeated_reads() {
        let body = Body::new(form(&[("a", "1")]), Bytes::new());
        assert_eq!(body.data(), body.data());
    }

    #[test]
    fn form_parsing_decodes_escapes_and_keeps_the_last_duplicate() {
        let parsed = parse_form(b"a=1&b=two%20words&a=3");
        assert_eq!(
            Value::Object(parsed),
            json!({"a": "3", "b": "two words"})
        );
    }
}
