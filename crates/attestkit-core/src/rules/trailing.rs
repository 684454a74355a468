//! Trailing fields shared across document types
//!
//! Company identity, representative, address, period and place of
//! signature. Each group's visibility is an explicit per-category or
//! per-type table.

use attestkit_model::{Category, DocumentTypeId, FieldName, FieldSection, FieldSpec, FieldValues};

use crate::registry::{descriptor, Issuer};

const SECTION: FieldSection = FieldSection::Trailing;

/// Label and requiredness of one period field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DateRule {
    label: &'static str,
    required: bool,
}

const fn req(label: &'static str) -> Option<DateRule> {
    Some(DateRule {
        label,
        required: true,
    })
}

const fn opt(label: &'static str) -> Option<DateRule> {
    Some(DateRule {
        label,
        required: false,
    })
}

/// `(dateDebut, dateFin)` rules for a document type
fn period_rules(id: DocumentTypeId, values: &FieldValues) -> (Option<DateRule>, Option<DateRule>) {
    use DocumentTypeId::*;
    match id {
        AttestationPriseEnCharge => (opt("Prise en charge à partir du"), opt("Jusqu'au")),
        AttestationConcubinage => (req("Vie commune depuis le"), None),
        AttestationTravail => (req("Date d'embauche"), opt("Date de fin de contrat")),
        AttestationSalaire => (opt("Date d'embauche"), None),
        CertificatTravail => (req("Date d'entrée"), req("Date de sortie")),
        PromesseEmbauche => {
            let fixed_term = values.get(FieldName::TypeContrat) == Some("CDD");
            let end = if fixed_term {
                req("Date de fin du contrat")
            } else {
                opt("Date de fin du contrat")
            };
            (req("Date de prise de poste"), end)
        }
        AttestationStage => (req("Début du stage"), req("Fin du stage")),
        Procuration => (opt("Valable à partir du"), opt("Jusqu'au")),
        AttestationAssiduite => (req("Début de la période"), opt("Fin de la période")),
        AttestationHebergement => (req("Hébergé(e) depuis le"), opt("Jusqu'au")),
        JustificatifDomicile => (opt("Occupant depuis le"), None),
        AttestationLoyerAJour => (opt("Locataire depuis le"), None),
        AttestationConcordance
        | AttestationNonPolygamie
        | AttestationRessources
        | AttestationSurHonneur
        | AttestationTemoin
        | AttestationCelibat
        | DeclarationPerte
        | AttestationSituationFamiliale
        | AttestationNonCondamnation
        | CertificatScolarite
        | AttestationReussite
        | AttestationInscription
        | QuittanceLoyer => (None, None),
    }
}

fn company_fields(id: DocumentTypeId) -> Vec<FieldSpec> {
    if id.category() == Category::Emploi {
        vec![
            FieldSpec::new(FieldName::Entreprise, "Raison sociale", SECTION).required(),
            FieldSpec::new(FieldName::Siret, "Numéro SIRET", SECTION)
                .with_placeholder("14 chiffres"),
            FieldSpec::new(FieldName::EntrepriseAdresse, "Adresse de l'entreprise", SECTION),
            FieldSpec::new(FieldName::EntrepriseVille, "Ville de l'entreprise", SECTION),
        ]
    } else if id == DocumentTypeId::AttestationRessources {
        vec![FieldSpec::new(FieldName::Entreprise, "Employeur (le cas échéant)", SECTION)]
    } else {
        Vec::new()
    }
}

fn representative_fields(id: DocumentTypeId) -> Vec<FieldSpec> {
    if descriptor(id).issuer != Issuer::Organization {
        return Vec::new();
    }
    let (name, quality, hint) = match id.category() {
        Category::Education => (
            "Nom du chef d'établissement",
            "Qualité du signataire",
            "Ex : proviseur, directrice",
        ),
        Category::Logement => (
            "Nom du bailleur",
            "Qualité du bailleur",
            "Ex : propriétaire, gestionnaire",
        ),
        _ => (
            "Nom du représentant de l'entreprise",
            "Qualité du représentant",
            "Ex : gérant, DRH",
        ),
    };
    vec![
        FieldSpec::new(FieldName::RepresentantNom, name, SECTION).required(),
        FieldSpec::new(FieldName::RepresentantQualite, quality, SECTION).with_placeholder(hint),
    ]
}

fn address_fields(id: DocumentTypeId) -> Vec<FieldSpec> {
    match id.category() {
        Category::Logement | Category::Prefecture | Category::Personnel => vec![
            FieldSpec::new(FieldName::Adresse, "Adresse", SECTION)
                .required()
                .with_placeholder("Ex : 12 rue des Lilas"),
            FieldSpec::new(FieldName::CodePostal, "Code postal", SECTION)
                .required()
                .with_placeholder("75001"),
            FieldSpec::new(FieldName::Ville, "Ville", SECTION).required(),
        ],
        Category::Emploi | Category::Education => Vec::new(),
    }
}

pub(super) fn trailing_fields(id: DocumentTypeId, values: &FieldValues) -> Vec<FieldSpec> {
    let mut specs = company_fields(id);
    specs.extend(representative_fields(id));
    specs.extend(address_fields(id));

    let (start, end) = period_rules(id, values);
    if let Some(rule) = start {
        specs.push(
            FieldSpec::new(FieldName::DateDebut, rule.label, SECTION).required_if(rule.required),
        );
    }
    if let Some(rule) = end {
        specs.push(
            FieldSpec::new(FieldName::DateFin, rule.label, SECTION).required_if(rule.required),
        );
    }

    specs.push(
        FieldSpec::new(FieldName::LieuSignature, "Fait à", SECTION).with_placeholder("Ex : Paris"),
    );
    specs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_date_implies_start_date() {
        for id in DocumentTypeId::ALL {
            let (start, end) = period_rules(id, &FieldValues::new());
            if end.is_some() {
                assert!(start.is_some(), "{} has an end date without a start", id);
            }
        }
    }

    #[test]
    fn test_place_of_signature_always_last() {
        for id in DocumentTypeId::ALL {
            let specs = trailing_fields(id, &FieldValues::new());
            let last = specs.last().unwrap();
            assert_eq!(last.name, FieldName::LieuSignature);
            assert!(!last.required);
        }
    }

    #[test]
    fn test_resources_company_optional() {
        let specs = company_fields(DocumentTypeId::AttestationRessources);
        assert_eq!(specs.len(), 1);
        assert!(!specs[0].required);
    }
}
