// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Loads a HuggingFace `tokenizer.json` from disk and exposes
// its normalizer + pre-tokenizer as a Segmenter.
//
// Only the text-splitting half of the tokenizer is used. The
// vocabulary model is never run, because the aligner needs
// surface strings, not ids or sub-word pieces.
//
// A normalizer that rewrites text (lower-casing, accent
// stripping) produces tokens that are not substrings of the
// input, and such requests fail with AlignmentFailure.

use anyhow::Result;
use std::path::PathBuf;
use tokenizers::{
    Normalizer, OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer, Tokenizer,
};

use crate::data::segmenter::group_sentences;
use crate::domain::traits::Segmenter;
use crate::error::ServiceError;

/// File name looked up when the store points at a directory
const TOKENIZER_FILE: &str = "tokenizer.json";

pub struct TokenizerStore {
    path: PathBuf,
}

impl TokenizerStore {
    /// `path` may be a tokenizer.json file or a directory holding one
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolved path of the tokenizer.json file
    pub fn file(&self) -> PathBuf {
        if self.path.is_dir() {
            self.path.join(TOKENIZER_FILE)
        } else {
            self.path.clone()
        }
    }

    /// Load the tokenizer from disk
    pub fn load(&self) -> Result<Tokenizer> {
        let path = self.file();
        Tokenizer::from_file(&path).map_err(|e| {
            anyhow::anyhow!("Cannot load tokenizer from '{}': {}", path.display(), e)
        })
    }

    /// Load the tokenizer and wrap it as a Segmenter
    pub fn segmenter(&self) -> Result<PretrainedSegmenter> {
        let tokenizer = self.load()?;
        tracing::info!("Loaded tokenizer from '{}'", self.file().display());
        Ok(PretrainedSegmenter::new(tokenizer))
    }
}

// ─── PretrainedSegmenter ──────────────────────────────────────────────────────
/// Segmenter backed by a loaded tokenizer's normalizer and pre-tokenizer.
pub struct PretrainedSegmenter {
    tokenizer: Tokenizer,
}

impl PretrainedSegmenter {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }
}

impl Segmenter for PretrainedSegmenter {
    fn segment(&self, text: &str) -> crate::error::Result<Vec<Vec<String>>> {
        let mut pretokenized = PreTokenizedString::from(text);

        if let Some(normalizer) = self.tokenizer.get_normalizer() {
            pretokenized
                .normalize(|s| normalizer.normalize(s))
                .map_err(|e| ServiceError::Segmentation(e.to_string()))?;
        }
        if let Some(pre_tokenizer) = self.tokenizer.get_pre_tokenizer() {
            pre_tokenizer
                .pre_tokenize(&mut pretokenized)
                .map_err(|e| ServiceError::Segmentation(e.to_string()))?;
        }

        let splits = pretokenized.get_splits(OffsetReferential::Original, OffsetType::Byte);
        Ok(group_sentences(
            text,
            splits.into_iter().map(|(token, offsets, _)| (token, offsets)),
        ))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    /// Minimal word-level tokenizer.json with the given normalizer
    fn write_tokenizer(dir: &Path, normalizer: serde_json::Value) -> PathBuf {
        let json = serde_json::json!({
            "version": "1.0",
            "truncation": null,
            "padding": null,
            "added_tokens": [],
            "normalizer": normalizer,
            "pre_tokenizer": { "type": "Whitespace" },
            "post_processor": null,
            "decoder": null,
            "model": {
                "type": "WordLevel",
                "vocab": { "[UNK]": 0, "hi": 1, "there": 2 },
                "unk_token": "[UNK]"
            }
        });
        let path = dir.join(TOKENIZER_FILE);
        std::fs::write(&path, serde_json::to_string_pretty(&json).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_directory_resolves_to_tokenizer_json() {
        let dir   = tempfile::tempdir().unwrap();
        let store = TokenizerStore::new(dir.path());
        assert_eq!(store.file(), dir.path().join(TOKENIZER_FILE));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir   = tempfile::tempdir().unwrap();
        let store = TokenizerStore::new(dir.path().join("nope.json"));
        let err   = store.load().err().expect("load should fail");
        assert!(err.to_string().contains("Cannot load tokenizer"));
    }

    #[test]
    fn test_pre_tokenizer_without_normalizer() {
        let dir = tempfile::tempdir().unwrap();
        write_tokenizer(dir.path(), serde_json::Value::Null);

        let seg = TokenizerStore::new(dir.path()).segmenter().unwrap();
        let out = seg.segment("Hi there. Bye").unwrap();
        assert_eq!(out, vec![vec!["Hi", "there", "."], vec!["Bye"]]);
    }

    #[test]
    fn test_lowercase_normalizer_changes_tokens() {
        let dir  = tempfile::tempdir().unwrap();
        let file = write_tokenizer(dir.path(), serde_json::json!({ "type": "Lowercase" }));

        let seg = TokenizerStore::new(file).segmenter().unwrap();
        let out = seg.segment("Hi there.").unwrap();
        assert_eq!(out, vec![vec!["hi", "there", "."]]);
    }
}
