// ============================================================
// Layer 3 — Envelope and Discriminator
// ============================================================
// Every request and response travels as an Envelope:
//
//   { "discriminator": "<URI>", "payload": <any JSON> }
//
// The discriminator says how to read the payload. It is a
// closed enum with an `Other` bucket for URIs this service
// does not understand, so the dispatcher can match on it
// exhaustively.
//
// Envelopes are immutable: fields are private and only
// exposed through read-only accessors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::vocabulary::uri;
use crate::error::{Result, ServiceError};

// ─── Discriminator ────────────────────────────────────────────────────────────
/// The URI-valued tag that says how an envelope payload is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Discriminator {
    /// Plain text to process
    Text,
    /// A human-readable error message
    Error,
    /// An assembled LIF document
    Lapps,
    /// Service metadata
    Meta,
    /// Any other URI seen on input
    Other(String),
}

impl Discriminator {
    /// The wire form of this discriminator
    pub fn uri(&self) -> &str {
        match self {
            Discriminator::Text      => uri::TEXT,
            Discriminator::Error     => uri::ERROR,
            Discriminator::Lapps     => uri::LAPPS,
            Discriminator::Meta      => uri::META,
            Discriminator::Other(u)  => u,
        }
    }
}

impl From<String> for Discriminator {
    fn from(s: String) -> Self {
        match s.as_str() {
            uri::TEXT  => Discriminator::Text,
            uri::ERROR => Discriminator::Error,
            uri::LAPPS => Discriminator::Lapps,
            uri::META  => Discriminator::Meta,
            _          => Discriminator::Other(s),
        }
    }
}

impl From<&str> for Discriminator {
    fn from(s: &str) -> Self {
        Discriminator::from(s.to_string())
    }
}

impl From<Discriminator> for String {
    fn from(d: Discriminator) -> Self {
        match d {
            Discriminator::Other(u) => u,
            known                   => known.uri().to_string(),
        }
    }
}

impl std::fmt::Display for Discriminator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.uri())
    }
}

// ─── Envelope ─────────────────────────────────────────────────────────────────
/// A discriminator plus an opaque JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    discriminator: Discriminator,

    /// A missing payload key reads as `null`
    #[serde(default)]
    payload: Value,
}

impl Envelope {
    /// Build an envelope from a discriminator and any serialisable payload.
    pub fn new(discriminator: Discriminator, payload: impl Serialize) -> Result<Self> {
        Ok(Self {
            discriminator,
            payload: serde_json::to_value(payload)?,
        })
    }

    /// A text request envelope
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            discriminator: Discriminator::Text,
            payload:       Value::String(text.into()),
        }
    }

    /// An error envelope carrying a message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            discriminator: Discriminator::Error,
            payload:       Value::String(message.into()),
        }
    }

    /// Parse the canonical JSON form.
    /// Anything that is not `{discriminator, payload}` is malformed.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input)
            .map_err(|e| ServiceError::MalformedEnvelope(e.to_string()))
    }

    /// Render to the canonical JSON form. Key order is fixed,
    /// so equal envelopes always render to identical strings.
    ///
    /// Rendered through `Value`, whose Display cannot fail, so an
    /// error envelope can always be written out. Output matches
    /// the derived `Serialize` form.
    pub fn to_json(&self, pretty: bool) -> String {
        let mut map = Map::new();
        map.insert(
            "discriminator".to_string(),
            Value::String(self.discriminator.uri().to_string()),
        );
        map.insert("payload".to_string(), self.payload.clone());

        let value = Value::Object(map);
        if pretty {
            format!("{value:#}")
        } else {
            value.to_string()
        }
    }

    pub fn discriminator(&self) -> &Discriminator {
        &self.discriminator
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Read the payload as text.
    /// `null` gives `None`; anything other than a string is malformed.
    pub fn text_payload(&self) -> Result<Option<&str>> {
        match &self.payload {
            Value::Null      => Ok(None),
            Value::String(s) => Ok(Some(s.as_str())),
            other => Err(ServiceError::MalformedEnvelope(format!(
                "expected a string payload for {}, found {}",
                self.discriminator,
                json_kind(other)
            ))),
        }
    }
}

/// Short name of a JSON value's kind, for error messages
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null      => "null",
        Value::Bool(_)   => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_)  => "an array",
        Value::Object(_) => "an object",
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_uris_map_to_variants() {
        assert_eq!(Discriminator::from(uri::TEXT), Discriminator::Text);
        assert_eq!(Discriminator::from(uri::ERROR), Discriminator::Error);
        assert_eq!(Discriminator::from(uri::LAPPS), Discriminator::Lapps);
        assert_eq!(Discriminator::from(uri::META), Discriminator::Meta);
    }

    #[test]
    fn test_unknown_uri_keeps_its_value() {
        let d = Discriminator::from("http://vocab.lappsgrid.org/ns/query");
        assert_eq!(d, Discriminator::Other("http://vocab.lappsgrid.org/ns/query".into()));
        assert_eq!(d.uri(), "http://vocab.lappsgrid.org/ns/query");
    }

    #[test]
    fn test_parse_text_envelope() {
        let json = format!(r#"{{"discriminator":"{}","payload":"Hi there."}}"#, uri::TEXT);
        let env  = Envelope::from_json(&json).unwrap();
        assert_eq!(env.discriminator(), &Discriminator::Text);
        assert_eq!(env.text_payload().unwrap(), Some("Hi there."));
    }

    #[test]
    fn test_missing_payload_reads_as_none() {
        let json = format!(r#"{{"discriminator":"{}"}}"#, uri::TEXT);
        let env  = Envelope::from_json(&json).unwrap();
        assert_eq!(env.text_payload().unwrap(), None);
    }

    #[test]
    fn test_missing_discriminator_is_malformed() {
        let err = Envelope::from_json(r#"{"payload":"hello"}"#).unwrap_err();
        assert!(matches!(err, ServiceError::MalformedEnvelope(_)));
    }

    #[test]
    fn test_garbage_is_malformed() {
        let err = Envelope::from_json("not json at all").unwrap_err();
        assert!(err.to_string().starts_with("Malformed envelope:"));
    }

    #[test]
    fn test_non_string_text_payload_is_malformed() {
        let env = Envelope::new(Discriminator::Text, 42).unwrap();
        let err = env.text_payload().unwrap_err();
        assert!(err.to_string().contains("found a number"));
    }

    #[test]
    fn test_rendering_is_stable_and_reparses() {
        let env = Envelope::error("boom");
        assert_eq!(env.to_json(true), env.to_json(true));
        assert_eq!(
            env.to_json(false),
            format!(r#"{{"discriminator":"{}","payload":"boom"}}"#, uri::ERROR)
        );
        assert_eq!(Envelope::from_json(&env.to_json(true)).unwrap(), env);
    }

    #[test]
    fn test_rendering_matches_derived_serialize() {
        for env in [
            Envelope::error("boom"),
            Envelope::text("Hi there."),
            Envelope::new(Discriminator::from("urn:other"), serde_json::json!({"a": [1, 2]}))
                .unwrap(),
        ] {
            assert_eq!(env.to_json(false), serde_json::to_string(&env).unwrap());
            assert_eq!(env.to_json(true), serde_json::to_string_pretty(&env).unwrap());
        }
    }
}
