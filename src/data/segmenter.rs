// ============================================================
// Layer 4 — Segmenters
// ============================================================
// Implementations of the Segmenter trait that ship with the
// crate:
//
//   EnglishSegmenter — splits on whitespace and punctuation
//                      using the BERT pre-tokenizer from the
//                      `tokenizers` crate, then groups tokens
//                      into sentences.
//
//   FixedSegmenter   — returns preset batches regardless of
//                      the input text. Used to drive the
//                      aligner with exact tokenizer output.
//
// Sentence grouping (shared with PretrainedSegmenter):
//   - a sentence ends after a terminal token (. ! ?) that is
//     followed by whitespace or the end of the text, so "4.5"
//     and "approx.)" stay inside their sentence
//   - a blank line between two tokens also ends a sentence
//   - trailing tokens form a final sentence

use tokenizers::pre_tokenizers::bert::BertPreTokenizer;
use tokenizers::{OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer};

use crate::domain::traits::Segmenter;
use crate::error::{Result, ServiceError};

/// Tokens that close a sentence
const TERMINATORS: [&str; 3] = [".", "!", "?"];

// ─── EnglishSegmenter ─────────────────────────────────────────────────────────
/// Word and punctuation tokenizer for English text.
///
/// Tokens are slices of the input, so they always align.
#[derive(Debug, Default, Clone)]
pub struct EnglishSegmenter;

impl EnglishSegmenter {
    pub fn new() -> Self {
        Self
    }
}

impl Segmenter for EnglishSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<Vec<String>>> {
        let mut pretokenized = PreTokenizedString::from(text);
        BertPreTokenizer
            .pre_tokenize(&mut pretokenized)
            .map_err(|e| ServiceError::Segmentation(e.to_string()))?;

        let splits = pretokenized.get_splits(OffsetReferential::Original, OffsetType::Byte);
        Ok(group_sentences(
            text,
            splits.into_iter().map(|(token, offsets, _)| (token, offsets)),
        ))
    }
}

// ─── FixedSegmenter ───────────────────────────────────────────────────────────
/// Ignores its input and returns the batches it was built with.
#[derive(Debug, Clone)]
pub struct FixedSegmenter {
    sentences: Vec<Vec<String>>,
}

impl FixedSegmenter {
    pub fn new<S, T>(sentences: S) -> Self
    where
        S: IntoIterator<Item = T>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            sentences: sentences
                .into_iter()
                .map(|s| s.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

impl Segmenter for FixedSegmenter {
    fn segment(&self, _text: &str) -> Result<Vec<Vec<String>>> {
        Ok(self.sentences.clone())
    }
}

// ─── Sentence grouping ────────────────────────────────────────────────────────
/// Group `(token, (byte_start, byte_end))` splits into sentences.
/// Offsets refer to `text`.
pub(crate) fn group_sentences<'a>(
    text:   &str,
    splits: impl IntoIterator<Item = (&'a str, (usize, usize))>,
) -> Vec<Vec<String>> {
    let mut sentences = Vec::new();
    let mut current   = Vec::new();
    let mut last_end  = 0usize;

    for (token, (start, end)) in splits {
        if token.is_empty() {
            continue;
        }

        // A blank line between two tokens closes the open sentence
        let gap = text.get(last_end..start).unwrap_or("");
        if !current.is_empty() && gap.matches('\n').count() >= 2 {
            sentences.push(std::mem::take(&mut current));
        }

        current.push(token.to_string());
        last_end = end;

        if TERMINATORS.contains(&token) && ends_at_break(text, end) {
            sentences.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        sentences.push(current);
    }
    sentences
}

/// True when `text` has whitespace or nothing at byte `end`
fn ends_at_break(text: &str, end: usize) -> bool {
    text.get(end..)
        .and_then(|rest| rest.chars().next())
        .map_or(true, char::is_whitespace)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_splits_words_and_punctuation() {
        let out = EnglishSegmenter::new().segment("Hi there.").unwrap();
        assert_eq!(out, vec![vec!["Hi", "there", "."]]);
    }

    #[test]
    fn test_english_splits_sentences_on_terminators() {
        let out = EnglishSegmenter::new()
            .segment("It works! Does it? Yes.")
            .unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], vec!["It", "works", "!"]);
        assert_eq!(out[1], vec!["Does", "it", "?"]);
        assert_eq!(out[2], vec!["Yes", "."]);
    }

    #[test]
    fn test_english_blank_line_ends_sentence() {
        let out = EnglishSegmenter::new()
            .segment("A heading\n\nBody text here")
            .unwrap();
        assert_eq!(out, vec![vec!["A", "heading"], vec!["Body", "text", "here"]]);
    }

    #[test]
    fn test_english_keeps_trailing_fragment() {
        let out = EnglishSegmenter::new().segment("Done. and then").unwrap();
        assert_eq!(out, vec![vec!["Done", "."], vec!["and", "then"]]);
    }

    #[test]
    fn test_english_empty_text() {
        let out = EnglishSegmenter::new().segment("   ").unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_english_tokens_are_substrings() {
        let text = "Don't panic: it's only 4.5% (approx.) of “the” total…";
        for token in EnglishSegmenter::new().segment(text).unwrap().iter().flatten() {
            assert!(text.contains(token.as_str()), "token {token:?} not in text");
        }
    }

    #[test]
    fn test_decimal_and_abbreviation_stay_in_sentence() {
        let out = EnglishSegmenter::new()
            .segment("It grew 4.5 percent (approx.) today. Next")
            .unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].last().map(String::as_str), Some("."));
        assert!(out[0].contains(&"4".to_string()));
        assert!(out[0].contains(&"approx".to_string()));
        assert_eq!(out[1], vec!["Next"]);
    }

    #[test]
    fn test_group_terminator_glued_to_next_token() {
        let text = "v1.2 ok. Done";
        let out  = group_sentences(
            text,
            [
                ("v1", (0, 2)),
                (".", (2, 3)),
                ("2", (3, 4)),
                ("ok", (5, 7)),
                (".", (7, 8)),
                ("Done", (9, 13)),
            ],
        );
        assert_eq!(out, vec![vec!["v1", ".", "2", "ok", "."], vec!["Done"]]);
    }

    #[test]
    fn test_fixed_ignores_input() {
        let seg = FixedSegmenter::new([vec!["a", "b"], vec!["c"]]);
        assert_eq!(seg.segment("anything").unwrap(), vec![vec!["a", "b"], vec!["c"]]);
        assert_eq!(seg.segment("").unwrap().len(), 2);
    }

    #[test]
    fn test_group_single_newline_does_not_split() {
        let text = "one\ntwo";
        let out  = group_sentences(text, [("one", (0, 3)), ("two", (4, 7))]);
        assert_eq!(out, vec![vec!["one", "two"]]);
    }
}
