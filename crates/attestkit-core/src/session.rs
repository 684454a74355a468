//! Form session
//!
//! Owns the value record while the user fills a form. Every mutation hands
//! a snapshot of the full record to the draft-store callback; the session
//! itself never persists anything.

use serde::{Deserialize, Serialize};

use attestkit_model::{DocumentBody, DocumentTypeId, FieldName, FieldSpec, FieldValues};

use crate::generator::{generate, GenerationContext};
use crate::rules::{compute_field_specs, missing_required};

/// Identity data from the signed-in account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub display_name: Option<String>,
    pub civility: Option<String>,
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub date_naissance: Option<String>,
    pub lieu_naissance: Option<String>,
    pub email: Option<String>,
}

impl Profile {
    /// `(prénom, nom)` from the explicit fields, else from the display name
    ///
    /// The first word of the display name is taken as the first name, the
    /// rest as the last name.
    fn names(&self) -> (Option<String>, Option<String>) {
        let (mut prenom, mut nom) = (self.prenom.clone(), self.nom.clone());
        if let Some(display) = self.display_name.as_deref() {
            let mut words = display.split_whitespace();
            let first = words.next().map(str::to_string);
            let rest = words.collect::<Vec<_>>().join(" ");
            if prenom.is_none() {
                prenom = first;
            }
            if nom.is_none() && !rest.is_empty() {
                nom = Some(rest);
            }
        }
        (prenom, nom)
    }

    /// Record pre-filled from the profile
    pub fn to_values(&self) -> FieldValues {
        let (prenom, nom) = self.names();
        let pairs = [
            (FieldName::Civility, self.civility.clone()),
            (FieldName::Prenom, prenom),
            (FieldName::Nom, nom),
            (FieldName::DateNaissance, self.date_naissance.clone()),
            (FieldName::LieuNaissance, self.lieu_naissance.clone()),
            (FieldName::Email, self.email.clone()),
        ];
        pairs
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v)))
            .collect()
    }
}

/// Editing session over one value record
pub struct FormSession<F>
where
    F: FnMut(&FieldValues),
{
    values: FieldValues,
    document_type: Option<DocumentTypeId>,
    on_change: F,
}

impl<F> FormSession<F>
where
    F: FnMut(&FieldValues),
{
    /// Start a session from a stored draft (or an empty record)
    pub fn new(values: FieldValues, on_change: F) -> Self {
        Self {
            values,
            document_type: None,
            on_change,
        }
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn document_type(&self) -> Option<DocumentTypeId> {
        self.document_type
    }

    /// Edit one field; a blank value clears it
    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.values.set(name, value);
        (self.on_change)(&self.values);
    }

    /// Switch document type
    ///
    /// The record is kept whole: values of fields the new type hides are
    /// still there when switching back.
    pub fn select_document_type(&mut self, id: DocumentTypeId) -> Vec<FieldSpec> {
        log::debug!("document type selected: {}", id);
        self.document_type = Some(id);
        compute_field_specs(id, &self.values)
    }

    /// Pre-fill identity fields, only when the record is still empty
    ///
    /// Returns whether anything was written.
    pub fn apply_profile(&mut self, profile: &Profile) -> bool {
        if !self.values.is_empty() {
            return false;
        }
        let prefill = profile.to_values();
        if prefill.is_empty() {
            return false;
        }
        self.values = prefill;
        (self.on_change)(&self.values);
        true
    }

    /// Specs of the selected type, recomputed from the current values
    pub fn field_specs(&self) -> Vec<FieldSpec> {
        self.document_type
            .map(|id| compute_field_specs(id, &self.values))
            .unwrap_or_default()
    }

    /// Names of required fields still empty for the selected type
    pub fn missing_fields(&self) -> Vec<FieldName> {
        let specs = self.field_specs();
        missing_required(&specs, &self.values)
            .into_iter()
            .map(|s| s.name)
            .collect()
    }

    /// Body of the selected document, if a type is selected
    pub fn generate(&self, ctx: &GenerationContext) -> Option<DocumentBody> {
        self.document_type
            .map(|id| generate(id, &self.values, ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_every_edit_is_reported() {
        let snapshots = RefCell::new(Vec::new());
        let mut session = FormSession::new(FieldValues::new(), |v: &FieldValues| {
            snapshots.borrow_mut().push(v.clone())
        });
        session.set_field(FieldName::Nom, "Dupont");
        session.set_field(FieldName::Prenom, "Claire");
        drop(session);

        let snapshots = snapshots.into_inner();
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[1].get(FieldName::Nom), Some("Dupont"));
        assert_eq!(snapshots[1].get(FieldName::Prenom), Some("Claire"));
    }

    #[test]
    fn test_type_switch_keeps_values() {
        let mut session = FormSession::new(FieldValues::new(), |_: &FieldValues| {});
        session.select_document_type(DocumentTypeId::AttestationTravail);
        session.set_field(FieldName::Poste, "Développeuse");

        let specs = session.select_document_type(DocumentTypeId::JustificatifDomicile);
        assert!(specs.iter().all(|s| s.name != FieldName::Poste));

        let specs = session.select_document_type(DocumentTypeId::AttestationTravail);
        assert!(specs.iter().any(|s| s.name == FieldName::Poste));
        assert_eq!(session.values().get(FieldName::Poste), Some("Développeuse"));
    }

    #[test]
    fn test_profile_prefills_empty_record() {
        let profile = Profile {
            display_name: Some("Claire Marie Dupont".to_string()),
            email: Some("claire@exemple.fr".to_string()),
            ..Profile::default()
        };
        let mut session = FormSession::new(FieldValues::new(), |_: &FieldValues| {});
        assert!(session.apply_profile(&profile));
        assert_eq!(session.values().get(FieldName::Prenom), Some("Claire"));
        assert_eq!(session.values().get(FieldName::Nom), Some("Marie Dupont"));
        assert_eq!(
            session.values().get(FieldName::Email),
            Some("claire@exemple.fr")
        );
    }

    #[test]
    fn test_profile_never_overwrites() {
        let profile = Profile {
            nom: Some("Martin".to_string()),
            ..Profile::default()
        };
        let draft = FieldValues::new().with(FieldName::Nom, "Dupont");
        let mut session = FormSession::new(draft, |_: &FieldValues| {});
        assert!(!session.apply_profile(&profile));
        assert_eq!(session.values().get(FieldName::Nom), Some("Dupont"));
    }

    #[test]
    fn test_profile_fills_blank_resumed_draft() {
        let draft: FieldValues = serde_json::from_str(r#"{"nom":"","prenom":"  "}"#).unwrap();
        let profile = Profile {
            nom: Some("Dupont".to_string()),
            ..Profile::default()
        };
        let mut session = FormSession::new(draft, |_: &FieldValues| {});
        assert!(session.apply_profile(&profile));
        assert_eq!(session.values().get(FieldName::Nom), Some("Dupont"));
    }

    #[test]
    fn test_missing_fields_without_type() {
        let session = FormSession::new(FieldValues::new(), |_: &FieldValues| {});
        assert!(session.missing_fields().is_empty());
        assert!(session.field_specs().is_empty());
    }
}
