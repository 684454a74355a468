//! Content generator
//!
//! Turns a document type and a value record into a [`DocumentBody`]. The
//! frame (title, intro, subject line, closing, signature) is shared; the
//! clauses come from one composition function per document type, grouped
//! by category.
//!
//! Generation never fails for a typed identifier: missing values render as
//! bracketed placeholders and malformed dates as `[Date]`.

mod education;
mod emploi;
mod logement;
mod personnel;
mod phrases;
mod prefecture;
mod signature;
mod view;

use std::collections::BTreeSet;

use chrono::{Local, NaiveDate};

use attestkit_model::{DocumentBody, DocumentTypeId, FieldName, FieldValues};

use crate::error::Result;
use crate::registry::{descriptor, resolve};

pub use signature::{signature_role, SignatureRole};
pub use view::FieldView;

/// Inputs of generation that do not come from the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationContext {
    /// Date used for the closing line and for past/future wording
    pub today: NaiveDate,
}

impl GenerationContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Context dated with the local clock
    pub fn current() -> Self {
        Self::new(Local::now().date_naive())
    }
}

/// A generated body together with the fields read to produce it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracedBody {
    pub body: DocumentBody,
    pub reads: BTreeSet<FieldName>,
}

/// Generate the body of a document
pub fn generate(id: DocumentTypeId, values: &FieldValues, ctx: &GenerationContext) -> DocumentBody {
    generate_traced(id, values, ctx).body
}

/// Generate a body by string key
///
/// # Errors
///
/// Returns [`CoreError::UnknownDocumentType`](crate::CoreError::UnknownDocumentType)
/// when the key names no document type.
pub fn generate_by_key(
    key: &str,
    values: &FieldValues,
    ctx: &GenerationContext,
) -> Result<DocumentBody> {
    let id = resolve(key)?;
    Ok(generate(id, values, ctx))
}

/// Generate a body and report which fields were read
pub fn generate_traced(
    id: DocumentTypeId,
    values: &FieldValues,
    ctx: &GenerationContext,
) -> TracedBody {
    log::debug!("generating {} from {} values", id, values.len());
    let view = FieldView::new(id, values);
    let body = compose(id, &view, ctx);
    TracedBody {
        body,
        reads: view.into_reads(),
    }
}

fn clauses(id: DocumentTypeId, v: &FieldView, ctx: &GenerationContext) -> Vec<String> {
    use DocumentTypeId::*;
    match id {
        AttestationPriseEnCharge => prefecture::prise_en_charge(v),
        AttestationConcubinage => prefecture::concubinage(v),
        AttestationConcordance => prefecture::concordance(v),
        AttestationNonPolygamie => prefecture::non_polygamie(v),
        AttestationRessources => prefecture::ressources(v),
        AttestationTravail => emploi::travail(v, ctx),
        AttestationSalaire => emploi::salaire(v),
        CertificatTravail => emploi::certificat(v),
        PromesseEmbauche => emploi::promesse(v),
        AttestationStage => emploi::stage(v, ctx),
        AttestationSurHonneur => personnel::sur_honneur(v),
        AttestationTemoin => personnel::temoin(v),
        Procuration => personnel::procuration(v),
        AttestationCelibat => personnel::celibat(v),
        DeclarationPerte => personnel::perte(v),
        AttestationSituationFamiliale => personnel::situation_familiale(v),
        AttestationNonCondamnation => personnel::non_condamnation(v),
        CertificatScolarite => education::scolarite(v),
        AttestationReussite => education::reussite(v),
        AttestationAssiduite => education::assiduite(v),
        AttestationInscription => education::inscription(v),
        AttestationHebergement => logement::hebergement(v),
        QuittanceLoyer => logement::quittance(v),
        JustificatifDomicile => logement::justificatif(v),
        AttestationLoyerAJour => logement::loyer_a_jour(v, ctx),
    }
}

fn compose(id: DocumentTypeId, v: &FieldView, ctx: &GenerationContext) -> DocumentBody {
    let role = signature_role(id);
    let mut body_clauses = clauses(id, v, ctx);
    body_clauses.extend(phrases::tail(id, role, v));

    DocumentBody {
        title: descriptor(id).title.to_string(),
        intro: phrases::intro(id, role, v),
        subject_line: phrases::subject_line(v),
        body_clauses,
        signature_label: signature::signature_label(role, v),
        signatory_name: signature::signatory_name(role, v),
        closing: phrases::closing(v, ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;

    fn ctx() -> GenerationContext {
        GenerationContext::new(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
    }

    fn travail_values() -> FieldValues {
        FieldValues::from_pairs([
            (FieldName::Civility, "Madame"),
            (FieldName::Prenom, "Claire"),
            (FieldName::Nom, "Dupont"),
            (FieldName::Poste, "Développeuse"),
            (FieldName::TypeContrat, "CDI"),
            (FieldName::DateDebut, "2022-01-10"),
            (FieldName::Entreprise, "Acme SAS"),
            (FieldName::RepresentantNom, "Jean Martin"),
        ])
    }

    #[test]
    fn test_travail_scenario() {
        let body = generate(DocumentTypeId::AttestationTravail, &travail_values(), &ctx());
        assert_eq!(body.title, "Attestation de travail");
        assert!(body.subject_line.contains("Mme Claire Dupont"));
        assert!(body.body_clauses[0].contains("10/01/2022"));
        assert!(body.body_clauses[0].contains("employée"));
        assert!(!body.body_clauses.iter().any(|c| c.contains("fin le")));
        assert_eq!(body.signature_label, "Pour la société Acme SAS");
        assert_eq!(body.signatory_name, "Jean Martin");
    }

    #[test]
    fn test_contract_end_tense() {
        let ended = travail_values().with(FieldName::DateFin, "2023-12-31");
        let body = generate(DocumentTypeId::AttestationTravail, &ended, &ctx());
        assert!(body.body_clauses.iter().any(|c| c.contains("a pris fin le 31/12/2023")));

        let upcoming = travail_values().with(FieldName::DateFin, "2025-06-30");
        let body = generate(DocumentTypeId::AttestationTravail, &upcoming, &ctx());
        assert!(body.body_clauses.iter().any(|c| c.contains("prendra fin le 30/06/2025")));
    }

    #[test]
    fn test_quittance_total() {
        let values = FieldValues::from_pairs([
            (FieldName::RentAmount, "500"),
            (FieldName::ChargesAmount, "50"),
            (FieldName::RentPeriod, "mars 2024"),
        ]);
        let body = generate(DocumentTypeId::QuittanceLoyer, &values, &ctx());
        assert!(body.body_clauses[0].contains("550.00 €"));
        assert!(body.intro.ends_with("déclare avoir reçu de :"));
    }

    #[test]
    fn test_hidden_values_are_ignored() {
        let values = travail_values().with(FieldName::Adresse, "12 rue des Lilas");
        let body = generate(DocumentTypeId::AttestationTravail, &values, &ctx());
        assert!(!body.subject_line.contains("Lilas"));
    }

    #[test]
    fn test_concubinage_has_both_declarants() {
        let values = FieldValues::from_pairs([
            (FieldName::Prenom, "Claire"),
            (FieldName::Nom, "Dupont"),
            (FieldName::PartnerCivility, "Monsieur"),
            (FieldName::PartnerPrenom, "Paul"),
            (FieldName::PartnerNom, "Martin"),
        ]);
        let body = generate(DocumentTypeId::AttestationConcubinage, &values, &ctx());
        assert_eq!(body.intro, "Nous soussignés,");
        assert!(body.body_clauses[0].starts_with("et M. Paul Martin"));
        assert_eq!(body.signatory_name, "Claire Dupont et Paul Martin");
        assert_eq!(body.signature_label, "Les déclarants");
    }

    #[test]
    fn test_marriage_date_follows_status() {
        let values = FieldValues::from_pairs([
            (FieldName::SituationFamiliale, "Marié(e)"),
            (FieldName::DateMariage, "2015-06-20"),
        ]);
        let body = generate(DocumentTypeId::AttestationSituationFamiliale, &values, &ctx());
        assert!(body.body_clauses[0].contains("Marié(e) depuis le 20/06/2015"));

        let single = values.clone().with(FieldName::SituationFamiliale, "Célibataire");
        let body = generate(DocumentTypeId::AttestationSituationFamiliale, &single, &ctx());
        assert!(!body.body_clauses[0].contains("20/06/2015"));
    }

    #[test]
    fn test_generate_by_key() {
        let body = generate_by_key("certificat_scolarite", &FieldValues::new(), &ctx()).unwrap();
        assert_eq!(body.signature_label, "Le chef d'établissement");

        let err = generate_by_key("attestation_inconnue", &FieldValues::new(), &ctx()).unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownDocumentType("attestation_inconnue".to_string())
        );
    }

    #[test]
    fn test_closing_uses_context_date() {
        let body = generate(DocumentTypeId::AttestationCelibat, &FieldValues::new(), &ctx());
        assert_eq!(body.closing, "Fait à [Lieu], le 05/03/2024");
    }
}
