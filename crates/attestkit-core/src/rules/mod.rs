//! Field visibility and requirement rules
//!
//! [`compute_field_specs`] is a pure function of the document type and the
//! current values. It is recomputed on every render, so it must stay cheap
//! and side-effect free.
//!
//! Fields come out in presentation order:
//!
//! 1. identity of the person the document is about,
//! 2. document-specific groups ([`specific`]),
//! 3. universal trailing fields ([`trailing`]).
//!
//! A field that is not returned is hidden. Its value stays in the record
//! untouched; it is simply ignored for this document type.

mod specific;
mod trailing;

use std::collections::BTreeSet;

use attestkit_model::{
    Agreement, Category, DocumentTypeId, FieldName, FieldSection, FieldSpec, FieldValues,
};

use crate::registry::{descriptor, Issuer};

/// Ordered field specifications for a document type
///
/// Never empty: the identity group is present for every type.
pub fn compute_field_specs(id: DocumentTypeId, values: &FieldValues) -> Vec<FieldSpec> {
    let mut specs = identity_fields(id, values);
    specs.extend(specific::document_fields(id, values));
    specs.extend(trailing::trailing_fields(id, values));
    log::debug!("{}: {} field specs", id, specs.len());
    specs
}

/// Names of the fields shown by a set of specs
pub fn visible_fields(specs: &[FieldSpec]) -> BTreeSet<FieldName> {
    specs.iter().map(|s| s.name).collect()
}

/// Required specs whose field is empty in the record
pub fn missing_required<'a>(specs: &'a [FieldSpec], values: &FieldValues) -> Vec<&'a FieldSpec> {
    specs
        .iter()
        .filter(|s| s.required && !values.has(s.name))
        .collect()
}

/// Project the record onto the fields visible for a document type
///
/// Used by presentation code that must not see stale values of hidden
/// fields. The input record is not modified.
pub fn scoped_values(id: DocumentTypeId, values: &FieldValues) -> FieldValues {
    let specs = compute_field_specs(id, values);
    let mut scoped = values.restricted_to(specs.iter().map(|s| &s.name));
    // Written by the signing step, not a form field, but part of the record
    if let Some(signed_at) = values.get(FieldName::SignedAt) {
        scoped.set(FieldName::SignedAt, signed_at);
    }
    scoped
}

/// Label of a birth date, agreeing with the civility
pub fn birth_date_label(agreement: Agreement) -> String {
    format!("Né{} le", agreement.e())
}

/// Suffix naming the person the document is about (", du salarié", ...)
fn subject_suffix(id: DocumentTypeId) -> &'static str {
    use DocumentTypeId::*;
    match id {
        AttestationConcubinage => " du premier déclarant",
        AttestationHebergement | AttestationPriseEnCharge => " (déclarant)",
        QuittanceLoyer | AttestationLoyerAJour => " du locataire",
        _ => match id.category() {
            Category::Emploi => " du salarié",
            Category::Education => " de l'élève ou de l'étudiant",
            _ => "",
        },
    }
}

fn identity_fields(id: DocumentTypeId, values: &FieldValues) -> Vec<FieldSpec> {
    let suffix = subject_suffix(id);
    let agreement = Agreement(values.civility());
    let self_declared = descriptor(id).issuer == Issuer::SelfDeclared;
    let section = FieldSection::Identity;

    let mut specs = vec![
        FieldSpec::new(FieldName::Civility, format!("Civilité{}", suffix), section).required(),
        FieldSpec::new(FieldName::Nom, format!("Nom{}", suffix), section)
            .required()
            .with_placeholder("Ex : Dupont"),
        FieldSpec::new(FieldName::Prenom, format!("Prénom{}", suffix), section)
            .required()
            .with_placeholder("Ex : Claire"),
        FieldSpec::new(FieldName::DateNaissance, birth_date_label(agreement), section)
            .required_if(self_declared),
        FieldSpec::new(FieldName::LieuNaissance, "Lieu de naissance", section)
            .required_if(self_declared)
            .with_placeholder("Ex : Lyon (69)"),
    ];

    if id.category() == Category::Prefecture || id == DocumentTypeId::AttestationHebergement {
        specs.push(
            FieldSpec::new(FieldName::Nationalite, "Nationalité", section)
                .required_if(id == DocumentTypeId::AttestationNonPolygamie),
        );
    }

    specs.push(
        FieldSpec::new(FieldName::Email, "Adresse e-mail", section)
            .with_placeholder("nom@exemple.fr"),
    );
    specs
}
