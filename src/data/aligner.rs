// ============================================================
// Layer 4 — Offset Aligner
// ============================================================
// Maps the segmenter's token strings back onto character
// offsets in the original text.
//
// The segmenter only returns strings, not positions, so each
// token is located by searching the text. A single cursor
// moves left to right:
//
//   text:    "Hi there. Hi!"
//   tokens:  Hi  there  .  Hi  !
//   cursor:  0 → 2 → 8 → 9 → 12 → 13
//
// Each search starts at the cursor and takes the leftmost
// match, so a repeated token ("Hi") binds to the next unused
// occurrence and never to an earlier one.
//
// If a token does not occur at or after the cursor (e.g. the
// tokenizer lower-cased or re-quoted it), the whole request
// fails with AlignmentFailure. No annotation with a made-up
// offset is ever emitted.
//
// Offsets are counted in UTF-16 code units, the unit LIF
// consumers index text by. A character outside the Basic
// Multilingual Plane (most emoji) therefore spans two. The
// cursor is tracked in both bytes (for slicing) and UTF-16
// units (for output) so the text is only walked once.

use crate::domain::document::{Annotation, View};
use crate::domain::vocabulary::{features, uri};
use crate::error::{Result, ServiceError};

/// Walks a text once, turning tokens into Token annotations.
pub struct OffsetAligner<'t> {
    text:      &'t str,
    /// Cursor as a byte index into `text` (always a char boundary)
    byte_pos:  usize,
    /// The same cursor counted in UTF-16 code units
    utf16_pos: usize,
    /// Number of annotations emitted so far
    tok_num:   usize,
}

impl<'t> OffsetAligner<'t> {
    pub fn new(text: &'t str) -> Self {
        Self {
            text,
            byte_pos:  0,
            utf16_pos: 0,
            tok_num:   0,
        }
    }

    /// Current cursor, in UTF-16 code units
    pub fn position(&self) -> usize {
        self.utf16_pos
    }

    /// Locate the next token and advance the cursor past it.
    pub fn align_token(&mut self, token: &str) -> Result<Annotation> {
        let id   = format!("tok{}", self.tok_num);
        let rest = &self.text[self.byte_pos..];

        let offset = rest.find(token).ok_or_else(|| ServiceError::AlignmentFailure {
            token:    token.to_string(),
            id:       id.clone(),
            position: self.utf16_pos,
        })?;

        let begin = self.utf16_pos + rest[..offset].encode_utf16().count();
        let end   = begin + token.encode_utf16().count();

        self.byte_pos += offset + token.len();
        self.utf16_pos = end;
        self.tok_num  += 1;

        Ok(Annotation::new(id, uri::TOKEN, begin, end).with_feature(features::WORD, token))
    }

    /// Align every token of every sentence, in order.
    pub fn align_all(&mut self, sentences: &[Vec<String>]) -> Result<Vec<Annotation>> {
        sentences
            .iter()
            .flatten()
            .map(|token| self.align_token(token))
            .collect()
    }
}

/// Build the complete token view for `text`.
///
/// The view declares its TOKEN annotations as coming from
/// `producer` under the identifier `view_type`.
pub fn align_view(
    text:      &str,
    sentences: &[Vec<String>],
    view_id:   &str,
    producer:  &str,
    view_type: &str,
) -> Result<View> {
    let mut aligner = OffsetAligner::new(text);
    let mut view    = View::new(view_id);

    for annotation in aligner.align_all(sentences)? {
        view.add_annotation(annotation);
    }
    view.add_contains(uri::TOKEN, producer, view_type);

    tracing::debug!(
        "Aligned {} tokens across {} sentences",
        view.annotations.len(),
        sentences.len()
    );
    Ok(view)
}
