// ============================================================
// Service Error Taxonomy
// ============================================================
// Every failure the tokenizer service can hit while handling
// a single request. None of these are fatal to the process:
// the dispatcher turns each one into an error envelope and
// returns it through the same channel as a successful result.
//
// The Display text of each variant IS the message that ends
// up in the error envelope payload, so wording matters here.

use thiserror::Error;

/// Everything that can go wrong while processing one request.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The input could not be parsed into `{discriminator, payload}`,
    /// or the payload has the wrong shape for its discriminator.
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// The discriminator is neither the text media type nor an error.
    #[error("Invalid discriminator.\nExpected {expected}\nFound {found}")]
    ProtocolMismatch { expected: String, found: String },

    /// A text envelope arrived with a null, missing or empty payload.
    #[error("No input given.")]
    EmptyInput,

    /// A token emitted by the segmenter does not occur in the
    /// source text at or after the alignment cursor.
    #[error("Unable to align token '{token}' ({id}) at or after offset {position}")]
    AlignmentFailure {
        token:    String,
        id:       String,
        position: usize,
    },

    /// The segmenter itself failed.
    #[error("Tokenizer failure: {0}")]
    Segmentation(String),

    /// A response value could not be converted to JSON.
    #[error("Serialisation failure: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, ServiceError>;
