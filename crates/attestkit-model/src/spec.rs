//! Per-document-type field specifications
//!
//! A [`FieldSpec`] is the rule engine's answer to "how should this field be
//! presented for this document type, given the current values".

use serde::Serialize;

use crate::field::{FieldKind, FieldName};

/// Presentation group a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "title", rename_all = "lowercase")]
pub enum FieldSection {
    /// Identity of the person the document is about
    Identity,
    /// Document-specific group, with its heading
    Specific(&'static str),
    /// Universal trailing fields (representative, address, dates, place)
    Trailing,
}

impl FieldSection {
    /// Heading shown above the group
    pub fn title(self) -> &'static str {
        match self {
            FieldSection::Identity => "Identité",
            FieldSection::Specific(title) => title,
            FieldSection::Trailing => "Informations complémentaires",
        }
    }
}

/// How one field is presented for one document type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Catalog field
    pub name: FieldName,
    /// Input widget kind
    pub kind: FieldKind,
    /// Effective label
    pub label: String,
    /// Whether submission needs a value
    pub required: bool,
    /// Options for select inputs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Input hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Group the field is displayed in
    pub section: FieldSection,
}

impl FieldSpec {
    /// Create an optional spec with the field's intrinsic kind and options
    pub fn new(name: FieldName, label: impl Into<String>, section: FieldSection) -> Self {
        Self {
            name,
            kind: name.kind(),
            label: label.into(),
            required: false,
            options: name
                .options()
                .map(|opts| opts.iter().map(|o| o.to_string()).collect()),
            placeholder: None,
            section,
        }
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set requiredness from a condition
    pub fn required_if(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the input hint
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_builder() {
        let spec = FieldSpec::new(
            FieldName::TypeContrat,
            "Type de contrat",
            FieldSection::Specific("Emploi"),
        )
        .required()
        .with_placeholder("CDI");
        assert_eq!(spec.kind, FieldKind::Select);
        assert!(spec.required);
        assert!(spec.options.as_ref().unwrap().contains(&"CDD".to_string()));
        assert_eq!(spec.section.title(), "Emploi");
    }

    #[test]
    fn test_spec_serialize() {
        let spec = FieldSpec::new(FieldName::Nom, "Nom", FieldSection::Identity).required();
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["name"], "nom");
        assert_eq!(json["kind"], "text");
        assert_eq!(json["required"], true);
        assert_eq!(json["section"]["kind"], "identity");
        assert!(json.get("options").is_none());
    }
}
