//! Document type registry
//!
//! Static catalog of every supported document type with its browsing
//! metadata. The catalog is closed: nothing here is loaded at runtime and
//! nothing is ever mutated.

use std::str::FromStr;

use serde::Serialize;

use attestkit_model::{Category, DocumentTypeId};

use crate::error::{CoreError, Result};

/// Who issues and signs a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Issuer {
    /// Declared by the person named in the document ("sur l'honneur")
    SelfDeclared,
    /// Issued by an organization through its representative
    Organization,
}

/// Registry entry for one document type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTypeDescriptor {
    pub id: DocumentTypeId,
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    pub popular: bool,
    pub issuer: Issuer,
}

const fn entry(
    id: DocumentTypeId,
    category: Category,
    title: &'static str,
    description: &'static str,
    popular: bool,
    issuer: Issuer,
) -> DocumentTypeDescriptor {
    DocumentTypeDescriptor {
        id,
        category,
        title,
        description,
        popular,
        issuer,
    }
}

use Category::*;
use DocumentTypeId as Id;
use Issuer::*;

static REGISTRY: [DocumentTypeDescriptor; 25] = [
    entry(
        Id::AttestationPriseEnCharge,
        Prefecture,
        "Attestation de prise en charge",
        "Engagement à subvenir aux besoins d'un proche pour une demande de titre de séjour.",
        true,
        SelfDeclared,
    ),
    entry(
        Id::AttestationConcubinage,
        Prefecture,
        "Attestation de vie commune",
        "Déclaration conjointe de concubinage signée par les deux partenaires.",
        true,
        SelfDeclared,
    ),
    entry(
        Id::AttestationConcordance,
        Prefecture,
        "Attestation de concordance",
        "Atteste que deux documents désignent la même personne malgré une différence d'écriture.",
        false,
        SelfDeclared,
    ),
    entry(
        Id::AttestationNonPolygamie,
        Prefecture,
        "Déclaration de non-polygamie",
        "Déclaration sur l'honneur exigée pour certains titres de séjour.",
        false,
        SelfDeclared,
    ),
    entry(
        Id::AttestationRessources,
        Prefecture,
        "Attestation de ressources",
        "Déclaration des ressources mensuelles et de leur origine.",
        false,
        SelfDeclared,
    ),
    entry(
        Id::AttestationTravail,
        Emploi,
        "Attestation de travail",
        "Certifie qu'un salarié est employé par l'entreprise.",
        true,
        Organization,
    ),
    entry(
        Id::AttestationSalaire,
        Emploi,
        "Attestation de salaire",
        "Indique la rémunération brute et nette d'un salarié.",
        false,
        Organization,
    ),
    entry(
        Id::CertificatTravail,
        Emploi,
        "Certificat de travail",
        "Document remis au salarié à la fin de son contrat de travail.",
        true,
        Organization,
    ),
    entry(
        Id::PromesseEmbauche,
        Emploi,
        "Promesse d'embauche",
        "Engagement de l'employeur sur le poste, le contrat et la rémunération proposés.",
        false,
        Organization,
    ),
    entry(
        Id::AttestationStage,
        Emploi,
        "Attestation de stage",
        "Confirme la réalisation d'un stage au sein de l'entreprise.",
        false,
        Organization,
    ),
    entry(
        Id::AttestationSurHonneur,
        Personnel,
        "Attestation sur l'honneur",
        "Déclaration libre engageant la responsabilité de son auteur.",
        true,
        SelfDeclared,
    ),
    entry(
        Id::AttestationTemoin,
        Personnel,
        "Attestation de témoin",
        "Témoignage écrit relatant des faits constatés personnellement.",
        false,
        SelfDeclared,
    ),
    entry(
        Id::Procuration,
        Personnel,
        "Procuration",
        "Donne pouvoir à un tiers d'accomplir une démarche à votre place.",
        true,
        SelfDeclared,
    ),
    entry(
        Id::AttestationCelibat,
        Personnel,
        "Attestation de célibat",
        "Déclaration sur l'honneur de célibat.",
        false,
        SelfDeclared,
    ),
    entry(
        Id::DeclarationPerte,
        Personnel,
        "Déclaration de perte",
        "Déclaration sur l'honneur de la perte d'un document officiel.",
        false,
        SelfDeclared,
    ),
    entry(
        Id::AttestationSituationFamiliale,
        Personnel,
        "Attestation de situation familiale",
        "Déclaration de votre situation familiale actuelle.",
        false,
        SelfDeclared,
    ),
    entry(
        Id::AttestationNonCondamnation,
        Personnel,
        "Attestation de non-condamnation",
        "Déclaration sur l'honneur de n'avoir fait l'objet d'aucune condamnation pénale.",
        false,
        SelfDeclared,
    ),
    entry(
        Id::CertificatScolarite,
        Education,
        "Certificat de scolarité",
        "Atteste l'inscription d'un élève pour l'année scolaire.",
        true,
        Organization,
    ),
    entry(
        Id::AttestationReussite,
        Education,
        "Attestation de réussite",
        "Confirme l'obtention d'un diplôme ou la réussite à un examen.",
        false,
        Organization,
    ),
    entry(
        Id::AttestationAssiduite,
        Education,
        "Attestation d'assiduité",
        "Certifie la présence régulière d'un apprenant en formation.",
        false,
        Organization,
    ),
    entry(
        Id::AttestationInscription,
        Education,
        "Attestation d'inscription",
        "Confirme l'inscription dans une formation ou un établissement.",
        false,
        Organization,
    ),
    entry(
        Id::AttestationHebergement,
        Logement,
        "Attestation d'hébergement",
        "Certifie que vous hébergez une personne à votre domicile.",
        true,
        SelfDeclared,
    ),
    entry(
        Id::QuittanceLoyer,
        Logement,
        "Quittance de loyer",
        "Reçu du paiement du loyer et des charges pour une période donnée.",
        true,
        Organization,
    ),
    entry(
        Id::JustificatifDomicile,
        Logement,
        "Justificatif de domicile",
        "Déclaration sur l'honneur de votre adresse actuelle.",
        true,
        SelfDeclared,
    ),
    entry(
        Id::AttestationLoyerAJour,
        Logement,
        "Attestation de loyer à jour",
        "Certifie que le locataire est à jour du paiement de ses loyers.",
        false,
        Organization,
    ),
];

/// The full catalog, in registry order
pub fn list_types() -> &'static [DocumentTypeDescriptor] {
    &REGISTRY
}

/// All categories, in browsing order
pub fn list_categories() -> &'static [Category] {
    &Category::ALL
}

/// Typed lookup; total over the closed identifier set
pub fn descriptor(id: DocumentTypeId) -> &'static DocumentTypeDescriptor {
    // REGISTRY follows DocumentTypeId::ALL, checked by test_registry_order
    &REGISTRY[id as usize]
}

/// Resolve a string key to an identifier
pub fn resolve(key: &str) -> Result<DocumentTypeId> {
    Ok(DocumentTypeId::from_str(key)?)
}

/// Lookup by string key
///
/// An unknown key is a configuration bug: the key space is controlled by the
/// application, never by free user input.
pub fn find_type(key: &str) -> Result<&'static DocumentTypeDescriptor> {
    let id = resolve(key).map_err(|e| {
        log::error!("document type lookup failed: {}", e);
        e
    })?;
    Ok(descriptor(id))
}

/// Descriptors of one category, in registry order
pub fn types_in_category(category: Category) -> Vec<&'static DocumentTypeDescriptor> {
    REGISTRY.iter().filter(|d| d.category == category).collect()
}

/// Descriptors flagged as popular
pub fn popular_types() -> Vec<&'static DocumentTypeDescriptor> {
    REGISTRY.iter().filter(|d| d.popular).collect()
}

/// Category predicate of the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category restriction
    #[default]
    All,
    /// Only one category
    Only(Category),
}

impl CategoryFilter {
    fn accepts(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || s == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>()
            .map(CategoryFilter::Only)
            .map_err(|e| CoreError::UnknownCategory(e.0))
    }
}

/// Selector search
///
/// Case-insensitive substring match over title and description, intersected
/// with the category filter. An empty query matches everything.
pub fn filter_types(query: &str, category: CategoryFilter) -> Vec<&'static DocumentTypeDescriptor> {
    let needle = query.trim().to_lowercase();
    REGISTRY
        .iter()
        .filter(|d| category.accepts(d.category))
        .filter(|d| {
            needle.is_empty()
                || d.title.to_lowercase().contains(&needle)
                || d.description.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        assert_eq!(REGISTRY.len(), DocumentTypeId::ALL.len());
        for (entry, id) in REGISTRY.iter().zip(DocumentTypeId::ALL) {
            assert_eq!(entry.id, id);
            assert_eq!(descriptor(id).id, id);
        }
    }

    #[test]
    fn test_category_matches_identifier() {
        for d in list_types() {
            assert_eq!(d.category, d.id.category(), "{}", d.id);
        }
    }

    #[test]
    fn test_find_type() {
        let d = find_type("quittance_loyer").unwrap();
        assert_eq!(d.title, "Quittance de loyer");
        assert_eq!(d.category, Category::Logement);
    }

    #[test]
    fn test_find_unknown_type() {
        let err = find_type("attestation_licorne").unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownDocumentType("attestation_licorne".to_string())
        );
    }

    #[test]
    fn test_types_in_category() {
        let housing = types_in_category(Category::Logement);
        assert_eq!(housing.len(), 4);
        assert!(housing.iter().all(|d| d.category == Category::Logement));
    }

    #[test]
    fn test_popular_types() {
        let popular = popular_types();
        assert!(!popular.is_empty());
        assert!(popular.iter().any(|d| d.id == DocumentTypeId::AttestationTravail));
    }

    #[test]
    fn test_filter_case_insensitive() {
        let results = filter_types("QUITTANCE", CategoryFilter::All);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, DocumentTypeId::QuittanceLoyer);
    }

    #[test]
    fn test_filter_matches_description() {
        let results = filter_types("titre de séjour", CategoryFilter::All);
        assert!(results
            .iter()
            .any(|d| d.id == DocumentTypeId::AttestationPriseEnCharge));
    }

    #[test]
    fn test_filter_intersects_category() {
        let all = filter_types("attestation", CategoryFilter::All);
        let jobs = filter_types("attestation", CategoryFilter::Only(Category::Emploi));
        assert!(jobs.len() < all.len());
        assert!(jobs.iter().all(|d| d.category == Category::Emploi));
    }

    #[test]
    fn test_filter_empty_query_and_stability() {
        let first = filter_types("", CategoryFilter::All);
        let second = filter_types("", CategoryFilter::All);
        assert_eq!(first.len(), 25);
        assert_eq!(first, second);
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "education".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Education))
        );
        assert!("sport".parse::<CategoryFilter>().is_err());
    }
}
