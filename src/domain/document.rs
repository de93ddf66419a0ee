// ============================================================
// Layer 3 — Annotated Document Types
// ============================================================
// The success payload of the service: the original text, a
// language tag, and one or more views of annotations.
//
//   Document
//     ├── text, language
//     └── views: Vec<View>
//           ├── id
//           ├── contains: annotation type → { producer, type }
//           └── annotations: Vec<Annotation>
//                 └── id, type, start, end, features
//
// Offsets are character offsets into `Document::text`,
// counted in UTF-16 code units and end-exclusive.
//
// Maps are BTreeMaps so JSON key order never changes
// between runs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// An annotated text document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The text exactly as it was received
    pub text: String,

    /// Language tag of the text, e.g. "en"
    pub language: String,

    /// Annotation views in the order they were added
    pub views: Vec<View>,
}

impl Document {
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text:     text.into(),
            language: language.into(),
            views:    Vec::new(),
        }
    }

    /// Append a finished view
    pub fn add_view(&mut self, view: View) {
        self.views.push(view);
    }

    /// Length of the text in UTF-16 code units, the upper bound for offsets
    pub fn char_len(&self) -> usize {
        self.text.encode_utf16().count()
    }
}

/// Who produced the annotations of a given type in a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contains {
    /// Identity of the producing service
    pub producer: String,

    /// Identifier the producer uses for this view
    #[serde(rename = "type")]
    pub view_type: String,
}

/// A set of annotations from one producer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub id: String,

    /// Declares which annotation types appear in this view
    pub contains: BTreeMap<String, Contains>,

    pub annotations: Vec<Annotation>,
}

impl View {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id:          id.into(),
            contains:    BTreeMap::new(),
            annotations: Vec::new(),
        }
    }

    /// Declare that annotations of `annotation_type` in this view
    /// were produced by `producer`.
    pub fn add_contains(
        &mut self,
        annotation_type: impl Into<String>,
        producer:        impl Into<String>,
        view_type:       impl Into<String>,
    ) {
        self.contains.insert(
            annotation_type.into(),
            Contains {
                producer:  producer.into(),
                view_type: view_type.into(),
            },
        );
    }

    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }
}

/// A labelled character span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Unique within its view
    pub id: String,

    /// Annotation type URI
    #[serde(rename = "type")]
    pub kind: String,

    /// First UTF-16 unit of the span
    pub start: usize,

    /// One past the last UTF-16 unit of the span
    pub end: usize,

    pub features: BTreeMap<String, Value>,
}

impl Annotation {
    pub fn new(
        id:    impl Into<String>,
        kind:  impl Into<String>,
        start: usize,
        end:   usize,
    ) -> Self {
        Self {
            id:       id.into(),
            kind:     kind.into(),
            start,
            end,
            features: BTreeMap::new(),
        }
    }

    /// Builder-style feature setter
    pub fn with_feature(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.features.insert(name.into(), value.into());
        self
    }
}
