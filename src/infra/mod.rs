// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Filesystem-facing helpers used by the binary and by service
// construction:
//
//   tokenizer_store.rs — loads a tokenizer.json and adapts its
//                        normalizer + pre-tokenizer into a
//                        Segmenter
//
//   config_store.rs    — reads/writes ServiceConfig as JSON
//
// Request handling itself never touches the filesystem.

/// tokenizer.json loading and the PretrainedSegmenter
pub mod tokenizer_store;

/// ServiceConfig persistence
pub mod config_store;
