// ============================================================
// Layer 2 — Application Layer
// ============================================================
// Wires the domain types and the text pipeline into the
// service callers talk to.
//
//   service_config.rs   — settings fixed at construction
//   tokenizer_service.rs — envelope dispatch + document assembly

pub mod service_config;

pub mod tokenizer_service;
