//! Document type identifiers and categories
//!
//! The set of document kinds is closed: every identifier is known at compile
//! time and belongs to exactly one [`Category`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name a known document type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown document type: {0}")]
pub struct UnknownKey(pub String);

/// Error returned when a string does not name a known category
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// Browsing category of a document type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Residency and préfecture procedures
    Prefecture,
    /// Employment documents issued by an employer
    Emploi,
    /// Personal and legal declarations
    Personnel,
    /// Schools and training organizations
    Education,
    /// Housing, hosting and rent
    Logement,
}

impl Category {
    /// All categories, in browsing order
    pub const ALL: [Category; 5] = [
        Category::Prefecture,
        Category::Emploi,
        Category::Personnel,
        Category::Education,
        Category::Logement,
    ];

    /// Stable key used in URLs and JSON
    pub fn key(self) -> &'static str {
        match self {
            Category::Prefecture => "prefecture",
            Category::Emploi => "emploi",
            Category::Personnel => "personnel",
            Category::Education => "education",
            Category::Logement => "logement",
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Category::Prefecture => "Préfecture & titre de séjour",
            Category::Emploi => "Emploi",
            Category::Personnel => "Personnel & juridique",
            Category::Education => "Éducation",
            Category::Logement => "Logement",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Identifier of a supported document kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentTypeId {
    // Préfecture
    AttestationPriseEnCharge,
    AttestationConcubinage,
    AttestationConcordance,
    AttestationNonPolygamie,
    AttestationRessources,
    // Emploi
    AttestationTravail,
    AttestationSalaire,
    CertificatTravail,
    PromesseEmbauche,
    AttestationStage,
    // Personnel
    AttestationSurHonneur,
    AttestationTemoin,
    Procuration,
    AttestationCelibat,
    DeclarationPerte,
    AttestationSituationFamiliale,
    AttestationNonCondamnation,
    // Éducation
    CertificatScolarite,
    AttestationReussite,
    AttestationAssiduite,
    AttestationInscription,
    // Logement
    AttestationHebergement,
    QuittanceLoyer,
    JustificatifDomicile,
    AttestationLoyerAJour,
}

impl DocumentTypeId {
    /// Every document type, grouped by category
    pub const ALL: [DocumentTypeId; 25] = [
        DocumentTypeId::AttestationPriseEnCharge,
        DocumentTypeId::AttestationConcubinage,
        DocumentTypeId::AttestationConcordance,
        DocumentTypeId::AttestationNonPolygamie,
        DocumentTypeId::AttestationRessources,
        DocumentTypeId::AttestationTravail,
        DocumentTypeId::AttestationSalaire,
        DocumentTypeId::CertificatTravail,
        DocumentTypeId::PromesseEmbauche,
        DocumentTypeId::AttestationStage,
        DocumentTypeId::AttestationSurHonneur,
        DocumentTypeId::AttestationTemoin,
        DocumentTypeId::Procuration,
        DocumentTypeId::AttestationCelibat,
        DocumentTypeId::DeclarationPerte,
        DocumentTypeId::AttestationSituationFamiliale,
        DocumentTypeId::AttestationNonCondamnation,
        DocumentTypeId::CertificatScolarite,
        DocumentTypeId::AttestationReussite,
        DocumentTypeId::AttestationAssiduite,
        DocumentTypeId::AttestationInscription,
        DocumentTypeId::AttestationHebergement,
        DocumentTypeId::QuittanceLoyer,
        DocumentTypeId::JustificatifDomicile,
        DocumentTypeId::AttestationLoyerAJour,
    ];

    /// Stable snake_case key, identical to the serde representation
    pub fn key(self) -> &'static str {
        use DocumentTypeId::*;
        match self {
            AttestationPriseEnCharge => "attestation_prise_en_charge",
            AttestationConcubinage => "attestation_concubinage",
            AttestationConcordance => "attestation_concordance",
            AttestationNonPolygamie => "attestation_non_polygamie",
            AttestationRessources => "attestation_ressources",
            AttestationTravail => "attestation_travail",
            AttestationSalaire => "attestation_salaire",
            CertificatTravail => "certificat_travail",
            PromesseEmbauche => "promesse_embauche",
            AttestationStage => "attestation_stage",
            AttestationSurHonneur => "attestation_sur_honneur",
            AttestationTemoin => "attestation_temoin",
            Procuration => "procuration",
            AttestationCelibat => "attestation_celibat",
            DeclarationPerte => "declaration_perte",
            AttestationSituationFamiliale => "attestation_situation_familiale",
            AttestationNonCondamnation => "attestation_non_condamnation",
            CertificatScolarite => "certificat_scolarite",
            AttestationReussite => "attestation_reussite",
            AttestationAssiduite => "attestation_assiduite",
            AttestationInscription => "attestation_inscription",
            AttestationHebergement => "attestation_hebergement",
            QuittanceLoyer => "quittance_loyer",
            JustificatifDomicile => "justificatif_domicile",
            AttestationLoyerAJour => "attestation_loyer_a_jour",
        }
    }

    /// The category this document type is permanently assigned to
    pub fn category(self) -> Category {
        use DocumentTypeId::*;
        match self {
            AttestationPriseEnCharge
            | AttestationConcubinage
            | AttestationConcordance
            | AttestationNonPolygamie
            | AttestationRessources => Category::Prefecture,
            AttestationTravail
            | AttestationSalaire
            | CertificatTravail
            | PromesseEmbauche
            | AttestationStage => Category::Emploi,
            AttestationSurHonneur
            | AttestationTemoin
            | Procuration
            | AttestationCelibat
            | DeclarationPerte
            | AttestationSituationFamiliale
            | AttestationNonCondamnation => Category::Personnel,
            CertificatScolarite
            | AttestationReussite
            | AttestationAssiduite
            | AttestationInscription => Category::Education,
            AttestationHebergement
            | QuittanceLoyer
            | JustificatifDomicile
            | AttestationLoyerAJour => Category::Logement,
        }
    }
}

impl fmt::Display for DocumentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DocumentTypeId {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentTypeId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_matches_serde() {
        for id in DocumentTypeId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.key()));
        }
    }

    #[test]
    fn test_parse_roundtrip() {
        for id in DocumentTypeId::ALL {
            assert_eq!(id.key().parse::<DocumentTypeId>(), Ok(id));
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "attestation_inconnue".parse::<DocumentTypeId>().unwrap_err();
        assert_eq!(err, UnknownKey("attestation_inconnue".to_string()));
        assert!(err.to_string().contains("attestation_inconnue"));
    }

    #[test]
    fn test_every_category_is_populated() {
        for category in Category::ALL {
            assert!(
                DocumentTypeId::ALL.iter().any(|id| id.category() == category),
                "Category {} has no document type",
                category
            );
        }
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("logement".parse::<Category>(), Ok(Category::Logement));
        let err = "housing".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown category: housing");
    }
}
