// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain data types and traits that define what the service
// exchanges with its callers:
//
//   envelope.rs    — the discriminator + payload wrapper
//   document.rs    — Document / View / Annotation
//   descriptor.rs  — static service metadata
//   vocabulary.rs  — LAPPS URIs and feature names
//   traits.rs      — Segmenter and ProcessingService seams
//
// No tokenizer code and no I/O lives here.

pub mod descriptor;
pub mod document;
pub mod envelope;
pub mod traits;
pub mod vocabulary;
