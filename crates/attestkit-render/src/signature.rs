//! Signature area shared by both renderings

use serde::Serialize;

use attestkit_core::format::format_timestamp;
use attestkit_model::{DocumentBody, FieldName, FieldValues};

/// Caption, signatory and either an empty box or an e-signature stamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureArea {
    pub label: String,
    pub signatory: String,
    /// `None` renders an empty placeholder box
    pub stamp: Option<String>,
}

impl SignatureArea {
    pub fn new(body: &DocumentBody, values: &FieldValues) -> Self {
        let stamp = values.get(FieldName::SignedAt).map(|signed_at| {
            format!(
                "Signé électroniquement par {} le {}",
                body.signatory_name,
                format_timestamp(signed_at)
            )
        });
        Self {
            label: body.signature_label.clone(),
            signatory: body.signatory_name.clone(),
            stamp,
        }
    }

    pub fn is_signed(&self) -> bool {
        self.stamp.is_some()
    }

    /// Text lines of the area, in reading order
    pub fn lines(&self) -> Vec<&str> {
        let mut lines = vec![self.label.as_str(), self.signatory.as_str()];
        if let Some(stamp) = &self.stamp {
            lines.push(stamp.as_str());
        }
        lines
    }
}
