// ============================================================
// Layer 2 — Service Configuration
// ============================================================
// Settings that shape the service's output. Loaded from a JSON
// file (see infra::config_store), overridden by CLI flags, and
// fixed for the lifetime of the service once constructed.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default producer identity written into metadata and views
pub const DEFAULT_PRODUCER: &str = "lif_tokenizer::TokenizerService";

/// Default identifier recorded in the view's contains declaration
pub const DEFAULT_VIEW_TYPE: &str = "lif-tokenizer";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Producer identity; also the service name in metadata
    pub producer: String,

    /// Identifier recorded under the TOKEN contains entry
    pub view_type: String,

    /// Id of the single view the service creates
    pub view_id: String,

    /// tokenizer.json (or a directory holding one). When unset the
    /// built-in English segmenter is used.
    pub tokenizer_path: Option<PathBuf>,

    /// Pretty-print response JSON
    pub pretty: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            producer:       DEFAULT_PRODUCER.to_string(),
            view_type:      DEFAULT_VIEW_TYPE.to_string(),
            view_id:        "v1".to_string(),
            tokenizer_path: None,
            pretty:         true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let cfg: ServiceConfig = serde_json::from_str(r#"{"view_id": "tokens"}"#).unwrap();
        assert_eq!(cfg.view_id, "tokens");
        assert_eq!(cfg.producer, DEFAULT_PRODUCER);
        assert!(cfg.pretty);
        assert!(cfg.tokenizer_path.is_none());
    }
}
