//! Residence-permit and prefecture documents

use attestkit_model::FieldName;

use super::phrases::{birth_clause, titled_person};
use super::view::FieldView;

/// Validity period sentence, or nothing when no date is set
pub(super) fn period_sentence(v: &FieldView, lead: &str) -> Option<String> {
    match (v.get(FieldName::DateDebut), v.get(FieldName::DateFin)) {
        (None, None) => None,
        (Some(_), None) => Some(format!(
            "{} à compter du {}.",
            lead,
            v.date(FieldName::DateDebut)
        )),
        (None, Some(_)) => Some(format!("{} jusqu'au {}.", lead, v.date(FieldName::DateFin))),
        (Some(_), Some(_)) => Some(format!(
            "{} du {} au {}.",
            lead,
            v.date(FieldName::DateDebut),
            v.date(FieldName::DateFin)
        )),
    }
}

/// Marital status, with the union date when the status reveals one
pub(super) fn marital_status(v: &FieldView) -> String {
    let status = v.text(FieldName::SituationFamiliale);
    if v.is_visible(FieldName::DateMariage) {
        format!("{} depuis le {}", status, v.date(FieldName::DateMariage))
    } else {
        status
    }
}

pub(super) fn prise_en_charge(v: &FieldView) -> Vec<String> {
    let mut beneficiary = format!(
        "{} {}",
        v.text(FieldName::BeneficiairePrenom),
        v.text(FieldName::BeneficiaireNom)
    );
    if v.get(FieldName::BeneficiaireDateNaissance).is_some() {
        beneficiary.push_str(&format!(
            ", né(e) le {}",
            v.date(FieldName::BeneficiaireDateNaissance)
        ));
    }
    if let Some(link) = v.get(FieldName::LienParente) {
        beneficiary.push_str(&format!(" (lien de parenté : {})", link));
    }

    let mut clauses = vec![
        format!(
            "déclare sur l'honneur prendre en charge {} et m'engage à subvenir à ses besoins \
             (hébergement, nourriture, frais médicaux) pendant toute la durée de son séjour en France.",
            beneficiary
        ),
    ];
    if v.get(FieldName::MontantMensuel).is_some() {
        clauses.push(format!(
            "Je m'engage à lui verser chaque mois la somme de {}.",
            v.amount(FieldName::MontantMensuel)
        ));
    }
    clauses.extend(period_sentence(v, "Cet engagement vaut"));
    clauses
}

pub(super) fn concubinage(v: &FieldView) -> Vec<String> {
    let partner = titled_person(
        v,
        FieldName::PartnerCivility,
        FieldName::PartnerPrenom,
        FieldName::PartnerNom,
    );
    let partner_birth = birth_clause(
        v,
        FieldName::PartnerCivility,
        FieldName::PartnerDateNaissance,
        FieldName::PartnerLieuNaissance,
    );
    vec![
        format!("et {}{},", partner, partner_birth),
        format!(
            "déclarons sur l'honneur vivre en concubinage à l'adresse indiquée ci-dessus depuis le {}.",
            v.date(FieldName::DateDebut)
        ),
    ]
}

pub(super) fn concordance(v: &FieldView) -> Vec<String> {
    let descriptor = |kind: FieldName, prenom: FieldName, nom: FieldName| {
        format!("{} : {} {}", v.text(kind), v.text(prenom), v.text(nom))
    };
    vec![
        "déclare sur l'honneur que les deux documents suivants désignent une seule et même \
         personne, à savoir moi-même :"
            .to_string(),
        format!(
            "{} ;",
            descriptor(FieldName::Doc1Type, FieldName::Doc1Prenom, FieldName::Doc1Nom)
        ),
        format!(
            "{}.",
            descriptor(FieldName::Doc2Type, FieldName::Doc2Prenom, FieldName::Doc2Nom)
        ),
        "La différence d'écriture entre ces documents résulte uniquement d'une erreur de \
         transcription."
            .to_string(),
    ]
}

pub(super) fn non_polygamie(v: &FieldView) -> Vec<String> {
    vec![
        "déclare sur l'honneur ne pas vivre en état de polygamie sur le territoire français."
            .to_string(),
        format!("Ma situation matrimoniale actuelle est : {}.", marital_status(v)),
    ]
}

pub(super) fn ressources(v: &FieldView) -> Vec<String> {
    let mut clauses = vec![
        format!(
            "déclare sur l'honneur disposer de ressources mensuelles d'un montant de {}.",
            v.amount(FieldName::MontantMensuel)
        ),
        format!(
            "Ces ressources proviennent de : {}.",
            v.text(FieldName::SourceRevenus)
        ),
    ];
    if let Some(employer) = v.get(FieldName::Entreprise) {
        clauses.push(format!("Employeur : {}.", employer));
    }
    clauses
}
