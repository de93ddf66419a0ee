// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Two seams:
//
//   Segmenter          — the external tokenizer. Text in,
//                        sentences of token strings out. The
//                        aligner never sees which tokenizer
//                        produced the tokens.
//
//   ProcessingService  — the transport-agnostic string contract
//                        of a service: JSON envelope in, JSON
//                        envelope out, plus a metadata query.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::error::Result;

// ─── Segmenter ────────────────────────────────────────────────────────────────
/// Splits text into sentences, each an ordered list of token strings.
///
/// Implementations:
///   - EnglishSegmenter    → BERT-style word/punctuation splitting
///   - PretrainedSegmenter → pre-tokenizer from a tokenizer.json
///   - FixedSegmenter      → preset output, for tests
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Result<Vec<Vec<String>>>;
}

// ─── ProcessingService ────────────────────────────────────────────────────────
/// A service that consumes and produces JSON envelopes.
///
/// Failures never escape as `Err`: they come back as error
/// envelopes from `execute`.
pub trait ProcessingService {
    /// Metadata envelope describing the service, as JSON
    fn metadata(&self) -> String;

    /// Handle one JSON envelope and return the response JSON
    fn execute(&self, input: &str) -> String;
}
