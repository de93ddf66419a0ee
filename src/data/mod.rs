// ============================================================
// Layer 4 — Text Pipeline
// ============================================================
// Everything between the raw request text and the finished
// token view:
//
//   raw text
//       │
//       ▼
//   Segmenter       → sentences of token strings
//       │
//       ▼
//   OffsetAligner   → Token annotations with char offsets
//       │
//       ▼
//   View            → handed to the application layer
//
// Each step is independently testable: the aligner can be
// fed fixed token batches without running a tokenizer.

/// Segmenter implementations and sentence grouping
pub mod segmenter;

/// Maps token strings back onto character offsets
pub mod aligner;
