// ============================================================
// Layer 3 — Service Descriptor
// ============================================================
// Static metadata describing what the service consumes and
// produces. Built once when the service is constructed and
// never changed afterwards.
//
// Reference: http://vocab.lappsgrid.org/schema/service-schema.json

use serde::{Deserialize, Serialize};

use crate::domain::vocabulary::uri;

/// Formats and encoding on one side of the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IoSpecification {
    /// Accepted or produced discriminator URIs
    pub format: Vec<String>,

    /// Annotation types (only meaningful on the produces side)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<String>,

    pub encoding: String,
}

/// Metadata returned by the metadata operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub name:        String,
    pub description: String,
    pub version:     String,
    pub vendor:      String,
    pub license:     String,
    pub requires:    IoSpecification,
    pub produces:    IoSpecification,
}

impl ServiceDescriptor {
    /// Descriptor for the tokenizer: UTF-8 text in, LIF Token annotations out.
    pub fn tokenizer(name: impl Into<String>) -> Self {
        Self {
            name:        name.into(),
            description: "Tokenizer that annotates English text with LIF Token annotations."
                .to_string(),
            version:     env!("CARGO_PKG_VERSION").to_string(),
            vendor:      "http://www.lappsgrid.org".to_string(),
            license:     uri::APACHE2.to_string(),
            requires: IoSpecification {
                format:      vec![uri::TEXT.to_string()],
                annotations: Vec::new(),
                encoding:    "UTF-8".to_string(),
            },
            produces: IoSpecification {
                format:      vec![uri::LAPPS.to_string()],
                annotations: vec![uri::TOKEN.to_string()],
                encoding:    "UTF-8".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizer_descriptor_fields() {
        let d = ServiceDescriptor::tokenizer("svc");
        assert_eq!(d.name, "svc");
        assert_eq!(d.license, uri::APACHE2);
        assert_eq!(d.requires.format, vec![uri::TEXT]);
        assert_eq!(d.produces.format, vec![uri::LAPPS]);
        assert_eq!(d.produces.annotations, vec![uri::TOKEN]);
        assert_eq!(d.produces.encoding, "UTF-8");
    }

    #[test]
    fn test_requires_omits_empty_annotations() {
        let v = serde_json::to_value(ServiceDescriptor::tokenizer("svc")).unwrap();
        assert!(v["requires"].get("annotations").is_none());
        assert_eq!(v["produces"]["annotations"][0], uri::TOKEN);
    }
}
