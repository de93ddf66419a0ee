// ============================================================
// lif-tokenizer — library root
// ============================================================
// A text-annotation service: raw text goes in wrapped in an
// envelope, a LIF document with one Token annotation per
// token comes back out.
//
// Layers:
//   domain/       — envelope, document model, descriptor, traits
//   data/         — segmenters and the offset aligner
//   application/  — config and the dispatching service
//   infra/        — tokenizer.json and config file loading
//
// The `ProcessingService` trait is the entry point:
//
//   let service = TokenizerService::from_config(ServiceConfig::default())?;
//   let response = service.execute(r#"{"discriminator": "...", "payload": "Hi there."}"#);

pub mod application;
pub mod data;
pub mod domain;
pub mod error;
pub mod infra;

pub use application::service_config::ServiceConfig;
pub use application::tokenizer_service::TokenizerService;
pub use domain::document::{Annotation, Contains, Document, View};
pub use domain::envelope::{Discriminator, Envelope};
pub use domain::traits::{ProcessingService, Segmenter};
pub use error::{Result, ServiceError};
