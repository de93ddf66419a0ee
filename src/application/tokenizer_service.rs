// ============================================================
// Layer 2 — Tokenizer Service (Dispatcher)
// ============================================================
// Routes one request envelope to a response envelope:
//
//   unparseable JSON          → error "Malformed envelope: …"
//   discriminator == ERROR    → returned unchanged
//   discriminator != TEXT     → error naming expected/found
//   TEXT, null or "" payload  → error "No input given."
//   TEXT with text            → segment → align → Document
//
// The service holds no per-request state. The descriptor and
// its rendered metadata JSON are built once in `new` and only
// read afterwards, so one service can be shared across threads.

use anyhow::Context;

use crate::application::service_config::ServiceConfig;
use crate::data::aligner::align_view;
use crate::data::segmenter::EnglishSegmenter;
use crate::domain::descriptor::ServiceDescriptor;
use crate::domain::document::Document;
use crate::domain::envelope::{Discriminator, Envelope};
use crate::domain::traits::{ProcessingService, Segmenter};
use crate::domain::vocabulary::uri;
use crate::error::{Result, ServiceError};
use crate::infra::tokenizer_store::TokenizerStore;

/// Language tag written into every document
pub const LANGUAGE: &str = "en";

pub struct TokenizerService {
    config:     ServiceConfig,
    segmenter:  Box<dyn Segmenter>,
    descriptor: ServiceDescriptor,
    /// Metadata envelope rendered once at construction
    metadata:   String,
}

impl TokenizerService {
    /// Build a service around an explicit segmenter.
    pub fn new(config: ServiceConfig, segmenter: Box<dyn Segmenter>) -> Result<Self> {
        let descriptor = ServiceDescriptor::tokenizer(&config.producer);
        let metadata   = Envelope::new(Discriminator::Meta, &descriptor)?.to_json(config.pretty);

        Ok(Self { config, segmenter, descriptor, metadata })
    }

    /// Build a service from config, loading the tokenizer it names
    /// or falling back to the built-in English segmenter.
    pub fn from_config(config: ServiceConfig) -> anyhow::Result<Self> {
        let segmenter: Box<dyn Segmenter> = match &config.tokenizer_path {
            Some(path) => Box::new(TokenizerStore::new(path).segmenter()?),
            None => {
                tracing::info!("Using built-in English segmenter");
                Box::new(EnglishSegmenter::new())
            }
        };
        Self::new(config, segmenter).context("Cannot build service metadata")
    }

    pub fn descriptor(&self) -> &ServiceDescriptor {
        &self.descriptor
    }

    /// Route a parsed envelope. Always returns an envelope;
    /// failures come back with the ERROR discriminator.
    pub fn dispatch(&self, envelope: Envelope) -> Envelope {
        match envelope.discriminator().clone() {
            // Already failed upstream: never re-wrap
            Discriminator::Error => envelope,

            Discriminator::Text => match self.annotate(&envelope) {
                Ok(response) => response,
                Err(e)       => self.error_envelope(e),
            },

            found @ (Discriminator::Lapps | Discriminator::Meta | Discriminator::Other(_)) => {
                self.error_envelope(ServiceError::ProtocolMismatch {
                    expected: uri::TEXT.to_string(),
                    found:    found.uri().to_string(),
                })
            }
        }
    }

    /// Segment and align `text` into a single-view document.
    pub fn process_text(&self, text: &str) -> Result<Document> {
        let sentences = self.segmenter.segment(text)?;
        let view = align_view(
            text,
            &sentences,
            &self.config.view_id,
            &self.config.producer,
            &self.config.view_type,
        )?;

        let mut document = Document::new(text, LANGUAGE);
        document.add_view(view);
        Ok(document)
    }

    /// Handle a TEXT envelope
    fn annotate(&self, envelope: &Envelope) -> Result<Envelope> {
        let text = envelope
            .text_payload()?
            .filter(|t| !t.is_empty())
            .ok_or(ServiceError::EmptyInput)?;

        let document = self.process_text(text)?;
        Envelope::new(Discriminator::Lapps, &document)
    }

    /// Wrap a failure as an error envelope and log it
    fn error_envelope(&self, error: ServiceError) -> Envelope {
        let message = error.to_string();
        tracing::error!("{}", message);
        Envelope::error(message)
    }
}

impl ProcessingService for TokenizerService {
    fn metadata(&self) -> String {
        self.metadata.clone()
    }

    fn execute(&self, input: &str) -> String {
        let envelope = match Envelope::from_json(input) {
            Ok(envelope) => envelope,
            Err(e)       => return self.error_envelope(e).to_json(self.config.pretty),
        };

        // Error input goes back byte-for-byte
        if envelope.discriminator() == &Discriminator::Error {
            return input.to_string();
        }

        self.dispatch(envelope).to_json(self.config.pretty)
    }
}
