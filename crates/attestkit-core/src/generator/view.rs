//! Visibility-scoped access to the value record

use std::cell::RefCell;
use std::collections::BTreeSet;

use chrono::NaiveDate;

use attestkit_model::{Agreement, Civility, DocumentTypeId, FieldName, FieldValues};

use crate::format::{self, DATE_PLACEHOLDER};
use crate::rules::{compute_field_specs, visible_fields};

/// Read-only view of the fields the rule engine shows for one document type
///
/// Hidden fields read as absent, whatever the record holds. Every read of a
/// visible field is recorded.
pub struct FieldView<'a> {
    values: &'a FieldValues,
    visible: BTreeSet<FieldName>,
    reads: RefCell<BTreeSet<FieldName>>,
}

impl<'a> FieldView<'a> {
    pub fn new(id: DocumentTypeId, values: &'a FieldValues) -> Self {
        let visible = visible_fields(&compute_field_specs(id, values));
        Self {
            values,
            visible,
            reads: RefCell::new(BTreeSet::new()),
        }
    }

    pub fn is_visible(&self, name: FieldName) -> bool {
        self.visible.contains(&name)
    }

    /// Trimmed value of a visible field
    pub fn get(&self, name: FieldName) -> Option<&'a str> {
        if !self.is_visible(name) {
            return None;
        }
        self.reads.borrow_mut().insert(name);
        self.values.get(name)
    }

    /// Value or the field's bracketed placeholder
    pub fn text(&self, name: FieldName) -> String {
        match self.get(name) {
            Some(value) => value.to_string(),
            None => name.placeholder_token(),
        }
    }

    /// `DD/MM/YYYY` rendering or `[Date]`
    pub fn date(&self, name: FieldName) -> String {
        match self.get(name) {
            Some(value) => format::format_date(value),
            None => DATE_PLACEHOLDER.to_string(),
        }
    }

    pub fn parsed_date(&self, name: FieldName) -> Option<NaiveDate> {
        self.get(name).and_then(format::parse_date)
    }

    /// Currency rendering or `[Montant]`
    pub fn amount(&self, name: FieldName) -> String {
        format::format_amount(self.get(name))
    }

    /// Agreement of the person the document is about
    pub fn agreement(&self) -> Agreement {
        self.civility_of(FieldName::Civility)
    }

    /// Agreement driven by a civility field
    pub fn civility_of(&self, field: FieldName) -> Agreement {
        Agreement(self.get(field).and_then(Civility::parse))
    }

    /// Fields read so far
    pub fn into_reads(self) -> BTreeSet<FieldName> {
        self.reads.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_field_reads_as_absent() {
        let values = FieldValues::new().with(FieldName::Poste, "Développeuse");
        let view = FieldView::new(DocumentTypeId::JustificatifDomicile, &values);
        assert_eq!(view.get(FieldName::Poste), None);
        assert_eq!(view.text(FieldName::Poste), "[Poste]");
        assert!(view.into_reads().is_empty());
    }

    #[test]
    fn test_reads_are_recorded() {
        let values = FieldValues::new().with(FieldName::Poste, "Développeuse");
        let view = FieldView::new(DocumentTypeId::AttestationTravail, &values);
        assert_eq!(view.get(FieldName::Poste), Some("Développeuse"));
        view.date(FieldName::DateDebut);
        let reads = view.into_reads();
        assert!(reads.contains(&FieldName::Poste));
        assert!(reads.contains(&FieldName::DateDebut));
    }

    #[test]
    fn test_placeholders() {
        let values = FieldValues::new();
        let view = FieldView::new(DocumentTypeId::QuittanceLoyer, &values);
        assert_eq!(view.text(FieldName::Nom), "[Nom]");
        assert_eq!(view.date(FieldName::PaymentDate), "[Date]");
        assert_eq!(view.amount(FieldName::RentAmount), "[Montant]");
    }
}
