// ============================================================
// Layer 3 — LAPPS Vocabulary
// ============================================================
// URIs from the LAPPS Grid vocabulary used on the wire.
// Discriminators identify envelope payloads; the TOKEN type
// and the `word` feature label annotations.
//
// Reference: http://vocab.lappsgrid.org

/// Discriminator URIs carried in `Envelope::discriminator`.
pub mod uri {
    /// Plain text payload, a request to process
    pub const TEXT: &str = "http://vocab.lappsgrid.org/ns/media/text";

    /// Error message payload
    pub const ERROR: &str = "http://vocab.lappsgrid.org/ns/error";

    /// LIF document payload (success response)
    pub const LAPPS: &str = "http://vocab.lappsgrid.org/ns/media/jsonld#lif";

    /// Service metadata payload
    pub const META: &str = "http://vocab.lappsgrid.org/ns/meta";

    /// Annotation type for tokens
    pub const TOKEN: &str = "http://vocab.lappsgrid.org/Token";

    /// Apache 2.0 licence identifier
    pub const APACHE2: &str = "http://vocab.lappsgrid.org/ns/license/apache-2.0";
}

/// Feature names attached to annotations.
pub mod features {
    /// The surface form of a token
    pub const WORD: &str = "word";
}
