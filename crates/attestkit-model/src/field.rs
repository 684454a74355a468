//! The field catalog
//!
//! [`FieldName`] is the superset of every input any document type can ask
//! for. Which fields are shown, and with which label, is decided per document
//! type by the rule engine; the catalog only carries what is intrinsic to a
//! field: its key, its input kind, its option set and its placeholder token.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string is not a catalog field key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown field: {0}")]
pub struct UnknownField(pub String);

/// Input widget kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Date,
    Number,
    Select,
    Textarea,
}

/// A field key from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    // Identity
    Civility,
    Nom,
    Prenom,
    DateNaissance,
    LieuNaissance,
    Nationalite,
    Email,
    // Second co-declarant
    PartnerCivility,
    PartnerNom,
    PartnerPrenom,
    PartnerDateNaissance,
    PartnerLieuNaissance,
    // Concordance descriptors
    Doc1Type,
    Doc1Nom,
    Doc1Prenom,
    Doc2Type,
    Doc2Nom,
    Doc2Prenom,
    // Beneficiary (hosted or supported person)
    BeneficiaireNom,
    BeneficiairePrenom,
    BeneficiaireDateNaissance,
    LienParente,
    // Company identity
    Entreprise,
    Siret,
    EntrepriseAdresse,
    EntrepriseVille,
    // Employment
    Poste,
    TypeContrat,
    TempsTravail,
    SalaryGross,
    SalaryNet,
    // Finance
    MontantMensuel,
    SourceRevenus,
    // Housing
    RentAmount,
    ChargesAmount,
    RentPeriod,
    PaymentDate,
    // Personal declarations
    DeclarationText,
    LienTemoin,
    FaitsDate,
    FaitsLieu,
    FaitsDescription,
    MandataireNom,
    MandatairePrenom,
    ObjetProcuration,
    SituationFamiliale,
    DateMariage,
    DocumentPerdu,
    DatePerte,
    LieuPerte,
    // Education
    Etablissement,
    Classe,
    AnneeScolaire,
    Formation,
    Diplome,
    Mention,
    SessionExamen,
    ExamList,
    TauxAssiduite,
    // Trailing fields
    RepresentantNom,
    RepresentantQualite,
    Adresse,
    CodePostal,
    Ville,
    DateDebut,
    DateFin,
    LieuSignature,
    // Written by the e-signature step, never shown in the form
    SignedAt,
}

pub const CONTRACT_TYPES: &[&str] = &[
    "CDI",
    "CDD",
    "Intérim",
    "Apprentissage",
    "Contrat de professionnalisation",
];

pub const WORKING_TIME: &[&str] = &["Temps plein", "Temps partiel"];

pub const MARITAL_STATUSES: &[&str] = &[
    "Célibataire",
    "Marié(e)",
    "Pacsé(e)",
    "Divorcé(e)",
    "Veuf/Veuve",
];

pub const IDENTITY_DOCUMENTS: &[&str] = &[
    "Acte de naissance",
    "Passeport",
    "Carte nationale d'identité",
    "Titre de séjour",
    "Livret de famille",
];

pub const LOST_DOCUMENTS: &[&str] = &[
    "Carte nationale d'identité",
    "Passeport",
    "Titre de séjour",
    "Permis de conduire",
    "Carte Vitale",
];

pub const MENTIONS: &[&str] = &["Passable", "Assez bien", "Bien", "Très bien"];

impl FieldName {
    /// The whole catalog, in declaration order
    pub const ALL: [FieldName; 68] = [
        FieldName::Civility,
        FieldName::Nom,
        FieldName::Prenom,
        FieldName::DateNaissance,
        FieldName::LieuNaissance,
        FieldName::Nationalite,
        FieldName::Email,
        FieldName::PartnerCivility,
        FieldName::PartnerNom,
        FieldName::PartnerPrenom,
        FieldName::PartnerDateNaissance,
        FieldName::PartnerLieuNaissance,
        FieldName::Doc1Type,
        FieldName::Doc1Nom,
        FieldName::Doc1Prenom,
        FieldName::Doc2Type,
        FieldName::Doc2Nom,
        FieldName::Doc2Prenom,
        FieldName::BeneficiaireNom,
        FieldName::BeneficiairePrenom,
        FieldName::BeneficiaireDateNaissance,
        FieldName::LienParente,
        FieldName::Entreprise,
        FieldName::Siret,
        FieldName::EntrepriseAdresse,
        FieldName::EntrepriseVille,
        FieldName::Poste,
        FieldName::TypeContrat,
        FieldName::TempsTravail,
        FieldName::SalaryGross,
        FieldName::SalaryNet,
        FieldName::MontantMensuel,
        FieldName::SourceRevenus,
        FieldName::RentAmount,
        FieldName::ChargesAmount,
        FieldName::RentPeriod,
        FieldName::PaymentDate,
        FieldName::DeclarationText,
        FieldName::LienTemoin,
        FieldName::FaitsDate,
        FieldName::FaitsLieu,
        FieldName::FaitsDescription,
        FieldName::MandataireNom,
        FieldName::MandatairePrenom,
        FieldName::ObjetProcuration,
        FieldName::SituationFamiliale,
        FieldName::DateMariage,
        FieldName::DocumentPerdu,
        FieldName::DatePerte,
        FieldName::LieuPerte,
        FieldName::Etablissement,
        FieldName::Classe,
        FieldName::AnneeScolaire,
        FieldName::Formation,
        FieldName::Diplome,
        FieldName::Mention,
        FieldName::SessionExamen,
        FieldName::ExamList,
        FieldName::TauxAssiduite,
        FieldName::RepresentantNom,
        FieldName::RepresentantQualite,
        FieldName::Adresse,
        FieldName::CodePostal,
        FieldName::Ville,
        FieldName::DateDebut,
        FieldName::DateFin,
        FieldName::LieuSignature,
        FieldName::SignedAt,
    ];

    /// Record key, identical to the serde representation
    pub fn key(self) -> &'static str {
        use FieldName::*;
        match self {
            Civility => "civility",
            Nom => "nom",
            Prenom => "prenom",
            DateNaissance => "dateNaissance",
            LieuNaissance => "lieuNaissance",
            Nationalite => "nationalite",
            Email => "email",
            PartnerCivility => "partnerCivility",
            PartnerNom => "partnerNom",
            PartnerPrenom => "partnerPrenom",
            PartnerDateNaissance => "partnerDateNaissance",
            PartnerLieuNaissance => "partnerLieuNaissance",
            Doc1Type => "doc1Type",
            Doc1Nom => "doc1Nom",
            Doc1Prenom => "doc1Prenom",
            Doc2Type => "doc2Type",
            Doc2Nom => "doc2Nom",
            Doc2Prenom => "doc2Prenom",
            BeneficiaireNom => "beneficiaireNom",
            BeneficiairePrenom => "beneficiairePrenom",
            BeneficiaireDateNaissance => "beneficiaireDateNaissance",
            LienParente => "lienParente",
            Entreprise => "entreprise",
            Siret => "siret",
            EntrepriseAdresse => "entrepriseAdresse",
            EntrepriseVille => "entrepriseVille",
            Poste => "poste",
            TypeContrat => "typeContrat",
            TempsTravail => "tempsTravail",
            SalaryGross => "salaryGross",
            SalaryNet => "salaryNet",
            MontantMensuel => "montantMensuel",
            SourceRevenus => "sourceRevenus",
            RentAmount => "rentAmount",
            ChargesAmount => "chargesAmount",
            RentPeriod => "rentPeriod",
            PaymentDate => "paymentDate",
            DeclarationText => "declarationText",
            LienTemoin => "lienTemoin",
            FaitsDate => "faitsDate",
            FaitsLieu => "faitsLieu",
            FaitsDescription => "faitsDescription",
            MandataireNom => "mandataireNom",
            MandatairePrenom => "mandatairePrenom",
            ObjetProcuration => "objetProcuration",
            SituationFamiliale => "situationFamiliale",
            DateMariage => "dateMariage",
            DocumentPerdu => "documentPerdu",
            DatePerte => "datePerte",
            LieuPerte => "lieuPerte",
            Etablissement => "etablissement",
            Classe => "classe",
            AnneeScolaire => "anneeScolaire",
            Formation => "formation",
            Diplome => "diplome",
            Mention => "mention",
            SessionExamen => "sessionExamen",
            ExamList => "examList",
            TauxAssiduite => "tauxAssiduite",
            RepresentantNom => "representantNom",
            RepresentantQualite => "representantQualite",
            Adresse => "adresse",
            CodePostal => "codePostal",
            Ville => "ville",
            DateDebut => "dateDebut",
            DateFin => "dateFin",
            LieuSignature => "lieuSignature",
            SignedAt => "signedAt",
        }
    }

    /// Input kind of the field
    pub fn kind(self) -> FieldKind {
        use FieldName::*;
        match self {
            DateNaissance | PartnerDateNaissance | BeneficiaireDateNaissance | PaymentDate
            | FaitsDate | DateMariage | DatePerte | DateDebut | DateFin => FieldKind::Date,
            SalaryGross | SalaryNet | MontantMensuel | RentAmount | ChargesAmount
            | TauxAssiduite => FieldKind::Number,
            Civility | PartnerCivility | Doc1Type | Doc2Type | TypeContrat | TempsTravail
            | SituationFamiliale | DocumentPerdu | Mention => FieldKind::Select,
            SourceRevenus | DeclarationText | FaitsDescription | ObjetProcuration | ExamList => {
                FieldKind::Textarea
            }
            _ => FieldKind::Text,
        }
    }

    /// Enumerated options for select fields
    pub fn options(self) -> Option<&'static [&'static str]> {
        use FieldName::*;
        match self {
            Civility | PartnerCivility => Some(&crate::civility::Civility::OPTIONS),
            Doc1Type | Doc2Type => Some(IDENTITY_DOCUMENTS),
            TypeContrat => Some(CONTRACT_TYPES),
            TempsTravail => Some(WORKING_TIME),
            SituationFamiliale => Some(MARITAL_STATUSES),
            DocumentPerdu => Some(LOST_DOCUMENTS),
            Mention => Some(MENTIONS),
            _ => None,
        }
    }

    /// Short name used inside the bracketed placeholder token
    pub fn token_label(self) -> &'static str {
        use FieldName::*;
        match self.kind() {
            FieldKind::Date => return "Date",
            FieldKind::Number if self != TauxAssiduite => return "Montant",
            _ => {}
        }
        match self {
            Civility | PartnerCivility => "Civilité",
            Nom | PartnerNom | Doc1Nom | Doc2Nom | BeneficiaireNom | MandataireNom => "Nom",
            Prenom | PartnerPrenom | Doc1Prenom | Doc2Prenom | BeneficiairePrenom
            | MandatairePrenom => "Prénom",
            LieuNaissance | PartnerLieuNaissance => "Lieu de naissance",
            Nationalite => "Nationalité",
            Email => "Email",
            Doc1Type | Doc2Type => "Type de document",
            LienParente => "Lien de parenté",
            Entreprise => "Entreprise",
            Siret => "SIRET",
            EntrepriseAdresse => "Adresse de l'entreprise",
            EntrepriseVille => "Ville de l'entreprise",
            Poste => "Poste",
            TypeContrat => "Type de contrat",
            TempsTravail => "Temps de travail",
            SourceRevenus => "Origine des ressources",
            RentPeriod => "Période",
            DeclarationText => "Déclaration",
            LienTemoin => "Lien avec les parties",
            FaitsLieu => "Lieu des faits",
            FaitsDescription => "Description des faits",
            ObjetProcuration => "Objet de la procuration",
            SituationFamiliale => "Situation familiale",
            DocumentPerdu => "Document perdu",
            LieuPerte => "Lieu de la perte",
            Etablissement => "Établissement",
            Classe => "Classe",
            AnneeScolaire => "Année scolaire",
            Formation => "Formation",
            Diplome => "Diplôme",
            Mention => "Mention",
            SessionExamen => "Session",
            ExamList => "Épreuves",
            TauxAssiduite => "Taux",
            RepresentantNom => "Représentant",
            RepresentantQualite => "Qualité",
            Adresse => "Adresse",
            CodePostal => "Code postal",
            Ville => "Ville",
            LieuSignature => "Lieu",
            SignedAt => "Horodatage",
            _ => "Valeur",
        }
    }

    /// Bracketed placeholder rendered in place of a missing value
    pub fn placeholder_token(self) -> String {
        format!("[{}]", self.token_label())
    }

    /// Whether the field may appear in a form at all
    pub fn is_form_field(self) -> bool {
        self != FieldName::SignedAt
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_key_matches_serde() {
        for field in FieldName::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.key()), "{:?}", field);
        }
    }

    #[test]
    fn test_catalog_has_no_duplicates() {
        let keys: BTreeSet<_> = FieldName::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys.len(), FieldName::ALL.len());
    }

    #[test]
    fn test_select_fields_have_options() {
        for field in FieldName::ALL {
            assert_eq!(
                field.kind() == FieldKind::Select,
                field.options().is_some(),
                "{}",
                field
            );
        }
    }

    #[test]
    fn test_placeholder_tokens() {
        assert_eq!(FieldName::Nom.placeholder_token(), "[Nom]");
        assert_eq!(FieldName::DateDebut.placeholder_token(), "[Date]");
        assert_eq!(FieldName::RentAmount.placeholder_token(), "[Montant]");
        for field in FieldName::ALL {
            assert_ne!(field.token_label(), "Valeur", "{} has no token label", field);
        }
    }

    #[test]
    fn test_parse_field() {
        assert_eq!("salaryGross".parse::<FieldName>(), Ok(FieldName::SalaryGross));
        assert!("salary_gross".parse::<FieldName>().is_err());
    }
}
