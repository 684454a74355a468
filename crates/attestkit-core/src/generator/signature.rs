//! Signature captions and signatory names

use attestkit_model::{DocumentTypeId, FieldName};

use super::phrases::person_name;
use super::view::FieldView;
use crate::registry::Issuer;

use DocumentTypeId as Id;
use SignatureRole as Role;

/// Who signs a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureRole {
    Declarant,
    CoDeclarants,
    Host,
    Witness,
    Mandator,
    Guarantor,
    Lessor,
    SchoolHead,
}

impl SignatureRole {
    /// Issuer implied by the role
    pub fn issuer(self) -> Issuer {
        match self {
            SignatureRole::Lessor | SignatureRole::SchoolHead => Issuer::Organization,
            _ => Issuer::SelfDeclared,
        }
    }
}

/// Explicit signature roles
///
/// Types missing from this table are signed on behalf of a company.
pub(crate) static SIGNATURE_TABLE: &[(DocumentTypeId, SignatureRole)] = &[
    (Id::AttestationPriseEnCharge, Role::Guarantor),
    (Id::AttestationConcubinage, Role::CoDeclarants),
    (Id::AttestationConcordance, Role::Declarant),
    (Id::AttestationNonPolygamie, Role::Declarant),
    (Id::AttestationRessources, Role::Declarant),
    (Id::AttestationSurHonneur, Role::Declarant),
    (Id::AttestationTemoin, Role::Witness),
    (Id::Procuration, Role::Mandator),
    (Id::AttestationCelibat, Role::Declarant),
    (Id::DeclarationPerte, Role::Declarant),
    (Id::AttestationSituationFamiliale, Role::Declarant),
    (Id::AttestationNonCondamnation, Role::Declarant),
    (Id::CertificatScolarite, Role::SchoolHead),
    (Id::AttestationReussite, Role::SchoolHead),
    (Id::AttestationAssiduite, Role::SchoolHead),
    (Id::AttestationInscription, Role::SchoolHead),
    (Id::AttestationHebergement, Role::Host),
    (Id::QuittanceLoyer, Role::Lessor),
    (Id::JustificatifDomicile, Role::Declarant),
    (Id::AttestationLoyerAJour, Role::Lessor),
];

/// Explicit role of a document type, if any
pub fn signature_role(id: DocumentTypeId) -> Option<SignatureRole> {
    SIGNATURE_TABLE
        .iter()
        .find(|(entry, _)| *entry == id)
        .map(|(_, role)| *role)
}

/// Caption shown above the signature area
pub(crate) fn signature_label(role: Option<SignatureRole>, v: &FieldView) -> String {
    let agreement = v.agreement();
    match role {
        Some(SignatureRole::Declarant) => agreement.choose("Le déclarant", "La déclarante"),
        Some(SignatureRole::CoDeclarants) => "Les déclarants".to_string(),
        Some(SignatureRole::Host) => agreement.choose("L'hébergeant", "L'hébergeante"),
        Some(SignatureRole::Witness) => "Le témoin".to_string(),
        Some(SignatureRole::Mandator) => agreement.choose("Le mandant", "La mandante"),
        Some(SignatureRole::Guarantor) => agreement.choose("Le garant", "La garante"),
        Some(SignatureRole::Lessor) => "Le bailleur".to_string(),
        Some(SignatureRole::SchoolHead) => "Le chef d'établissement".to_string(),
        None => format!("Pour la société {}", v.text(FieldName::Entreprise)),
    }
}

/// Name stamped by the electronic signature
pub(crate) fn signatory_name(role: Option<SignatureRole>, v: &FieldView) -> String {
    match role {
        Some(SignatureRole::CoDeclarants) => format!(
            "{} et {}",
            person_name(v, FieldName::Prenom, FieldName::Nom),
            person_name(v, FieldName::PartnerPrenom, FieldName::PartnerNom)
        ),
        Some(SignatureRole::Lessor) | Some(SignatureRole::SchoolHead) | None => {
            v.text(FieldName::RepresentantNom)
        }
        Some(_) => person_name(v, FieldName::Prenom, FieldName::Nom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::descriptor;
    use attestkit_model::Category;
    use std::collections::BTreeSet;

    #[test]
    fn test_table_has_no_duplicates() {
        let ids: BTreeSet<_> = SIGNATURE_TABLE.iter().map(|(id, _)| id.key()).collect();
        assert_eq!(ids.len(), SIGNATURE_TABLE.len());
    }

    #[test]
    fn test_fallback_is_employment_only() {
        for id in DocumentTypeId::ALL {
            assert_eq!(
                signature_role(id).is_none(),
                id.category() == Category::Emploi,
                "{}",
                id
            );
        }
    }

    #[test]
    fn test_role_matches_issuer() {
        for id in DocumentTypeId::ALL {
            let issuer = signature_role(id)
                .map(|r| r.issuer())
                .unwrap_or(Issuer::Organization);
            assert_eq!(issuer, descriptor(id).issuer, "{}", id);
        }
    }
}
