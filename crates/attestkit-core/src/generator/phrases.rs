//! Shared sentence builders

use attestkit_model::{DocumentTypeId, FieldName};

use super::signature::SignatureRole;
use super::view::FieldView;
use super::GenerationContext;
use crate::format::format_naive_date;

/// `Prénom Nom`, each part falling back to its placeholder
pub(crate) fn person_name(v: &FieldView, prenom: FieldName, nom: FieldName) -> String {
    format!("{} {}", v.text(prenom), v.text(nom))
}

/// `M. Prénom Nom` with the civility read from `civility`
pub(crate) fn titled_person(
    v: &FieldView,
    civility: FieldName,
    prenom: FieldName,
    nom: FieldName,
) -> String {
    format!(
        "{} {}",
        v.civility_of(civility).title(),
        person_name(v, prenom, nom)
    )
}

/// `, né le 05/03/1990 à Lyon`, or nothing when either part is missing
pub(crate) fn birth_clause(
    v: &FieldView,
    civility: FieldName,
    date: FieldName,
    place: FieldName,
) -> String {
    match (v.get(date), v.get(place)) {
        (Some(_), Some(place)) => format!(
            ", né{} le {} à {}",
            v.civility_of(civility).e(),
            v.date(date),
            place
        ),
        _ => String::new(),
    }
}

/// `12 rue des Lilas, 69003 Lyon` with placeholders
pub(crate) fn postal_address(v: &FieldView) -> String {
    format!(
        "{}, {} {}",
        v.text(FieldName::Adresse),
        v.text(FieldName::CodePostal),
        v.text(FieldName::Ville)
    )
}

/// The person the document is about
///
/// Nationality and address are appended when the document type shows them.
pub(crate) fn subject_line(v: &FieldView) -> String {
    let mut line = titled_person(v, FieldName::Civility, FieldName::Prenom, FieldName::Nom);
    line.push_str(&birth_clause(
        v,
        FieldName::Civility,
        FieldName::DateNaissance,
        FieldName::LieuNaissance,
    ));
    if let Some(nationality) = v.get(FieldName::Nationalite) {
        line.push_str(&format!(", de nationalité {}", nationality));
    }
    if v.is_visible(FieldName::Adresse) {
        line.push_str(&format!(", demeurant {}", postal_address(v)));
    }
    line
}

fn organization_verb(id: DocumentTypeId) -> &'static str {
    use DocumentTypeId::*;
    match id {
        CertificatTravail | CertificatScolarite | AttestationAssiduite => "certifie que :",
        PromesseEmbauche => "confirme son intention d'embaucher :",
        QuittanceLoyer => "déclare avoir reçu de :",
        _ => "atteste que :",
    }
}

/// Opening formula, driven by who signs
pub(crate) fn intro(id: DocumentTypeId, role: Option<SignatureRole>, v: &FieldView) -> String {
    let representative = v.text(FieldName::RepresentantNom);
    match role {
        None => {
            let quality = v
                .get(FieldName::RepresentantQualite)
                .map(|q| format!(", {}", q))
                .unwrap_or_default();
            format!(
                "Je soussigné(e) {}{}, agissant pour le compte de la société {}, {}",
                representative,
                quality,
                v.text(FieldName::Entreprise),
                organization_verb(id)
            )
        }
        Some(SignatureRole::SchoolHead) => format!(
            "Je soussigné(e) {}, {} de l'établissement {}, {}",
            representative,
            v.get(FieldName::RepresentantQualite)
                .unwrap_or("chef d'établissement"),
            v.text(FieldName::Etablissement),
            organization_verb(id)
        ),
        Some(SignatureRole::Lessor) => format!(
            "Je soussigné(e) {}, {} du logement situé {}, {}",
            representative,
            v.get(FieldName::RepresentantQualite).unwrap_or("bailleur"),
            postal_address(v),
            organization_verb(id)
        ),
        Some(SignatureRole::CoDeclarants) => "Nous soussignés,".to_string(),
        Some(_) => format!("Je soussigné{},", v.agreement().e()),
    }
}

/// `Fait à Lyon, le 05/03/2024`
pub(crate) fn closing(v: &FieldView, ctx: &GenerationContext) -> String {
    let place = v
        .get(FieldName::LieuSignature)
        .or_else(|| v.get(FieldName::Ville))
        .unwrap_or("[Lieu]");
    format!("Fait à {}, le {}", place, format_naive_date(ctx.today))
}

/// Closing clause shared by every document with the same kind of signatory
pub(crate) fn tail(
    id: DocumentTypeId,
    role: Option<SignatureRole>,
    v: &FieldView,
) -> Option<String> {
    match role {
        Some(SignatureRole::CoDeclarants) => Some(
            "Nous sommes informés que toute fausse déclaration nous expose aux sanctions \
             prévues par l'article 441-7 du Code pénal."
                .to_string(),
        ),
        Some(SignatureRole::Witness) => Some(
            "Je sais que la présente attestation est établie en vue de sa production en \
             justice et qu'une fausse attestation de ma part m'expose à des sanctions pénales."
                .to_string(),
        ),
        Some(SignatureRole::Lessor) if id == DocumentTypeId::QuittanceLoyer => Some(
            "Cette quittance annule tous les reçus qui auraient pu être établis \
             précédemment pour la même période."
                .to_string(),
        ),
        Some(SignatureRole::Lessor) | Some(SignatureRole::SchoolHead) | None => {
            if id == DocumentTypeId::PromesseEmbauche {
                return None;
            }
            Some(
                "Cette attestation est délivrée pour servir et valoir ce que de droit."
                    .to_string(),
            )
        }
        Some(_) => Some(format!(
            "Je suis informé{} que toute fausse déclaration m'expose aux sanctions prévues \
             par l'article 441-7 du Code pénal.",
            v.agreement().e()
        )),
    }
}
