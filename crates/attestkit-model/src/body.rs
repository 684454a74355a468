//! Renderer-agnostic document body
//!
//! The content generator produces one [`DocumentBody`]; the preview and the
//! export adapters both render from it.

use serde::{Deserialize, Serialize};

/// Structured result of content generation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentBody {
    /// Document title (e.g. "Attestation de travail")
    pub title: String,
    /// Opening formula ("Je soussigné(e) ...")
    pub intro: String,
    /// The person the document is about, with civility and birth details
    pub subject_line: String,
    /// Main clauses, in reading order
    pub body_clauses: Vec<String>,
    /// Caption of the signature area
    pub signature_label: String,
    /// Name used for the electronic signature stamp
    pub signatory_name: String,
    /// Place and date line ("Fait à ..., le ...")
    pub closing: String,
}

impl DocumentBody {
    /// All text of the body in reading order
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        [self.title.as_str(), self.intro.as_str(), self.subject_line.as_str()]
            .into_iter()
            .chain(self.body_clauses.iter().map(|c| c.as_str()))
            .chain([self.closing.as_str(), self.signature_label.as_str()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_order() {
        let body = DocumentBody {
            title: "Titre".to_string(),
            intro: "Intro".to_string(),
            subject_line: "Sujet".to_string(),
            body_clauses: vec!["Un".to_string(), "Deux".to_string()],
            signature_label: "Signature".to_string(),
            signatory_name: "Nom".to_string(),
            closing: "Fait".to_string(),
        };
        let segments: Vec<_> = body.segments().collect();
        assert_eq!(
            segments,
            vec!["Titre", "Intro", "Sujet", "Un", "Deux", "Fait", "Signature"]
        );
    }

    #[test]
    fn test_camel_case_keys() {
        let json = serde_json::to_value(DocumentBody::default()).unwrap();
        assert!(json.get("subjectLine").is_some());
        assert!(json.get("bodyClauses").is_some());
        assert!(json.get("signatureLabel").is_some());
    }
}
