//! Personal declarations

use attestkit_model::FieldName;

use super::prefecture::{marital_status, period_sentence};
use super::view::FieldView;

pub(super) fn sur_honneur(v: &FieldView) -> Vec<String> {
    vec![
        "déclare sur l'honneur :".to_string(),
        v.text(FieldName::DeclarationText),
    ]
}

pub(super) fn temoin(v: &FieldView) -> Vec<String> {
    let mut clauses = vec![format!(
        "atteste avoir personnellement constaté les faits suivants, survenus le {} à {} :",
        v.date(FieldName::FaitsDate),
        v.text(FieldName::FaitsLieu)
    )];
    clauses.push(v.text(FieldName::FaitsDescription));
    if let Some(link) = v.get(FieldName::LienTemoin) {
        clauses.push(format!("Lien avec les parties : {}.", link));
    }
    clauses
}

pub(super) fn procuration(v: &FieldView) -> Vec<String> {
    let mut clauses = vec![
        format!(
            "donne procuration à {} {} pour accomplir en mon nom les démarches suivantes :",
            v.text(FieldName::MandatairePrenom),
            v.text(FieldName::MandataireNom)
        ),
        v.text(FieldName::ObjetProcuration),
    ];
    clauses.extend(period_sentence(v, "Cette procuration est valable"));
    clauses
}

pub(super) fn celibat(v: &FieldView) -> Vec<String> {
    vec![format!(
        "déclare sur l'honneur être célibataire et n'être lié{} par aucun pacte civil de solidarité.",
        v.agreement().e()
    )]
}

pub(super) fn perte(v: &FieldView) -> Vec<String> {
    let place = match v.get(FieldName::LieuPerte) {
        Some(place) => format!(" à {}", place),
        None => String::new(),
    };
    vec![
        format!(
            "déclare sur l'honneur avoir perdu le document suivant : {}, le {}{}.",
            v.text(FieldName::DocumentPerdu),
            v.date(FieldName::DatePerte),
            place
        ),
        "Je m'engage à le restituer à l'autorité qui l'a délivré si je le retrouve.".to_string(),
    ]
}

pub(super) fn situation_familiale(v: &FieldView) -> Vec<String> {
    vec![format!(
        "déclare sur l'honneur que ma situation familiale actuelle est : {}.",
        marital_status(v)
    )]
}

pub(super) fn non_condamnation(_v: &FieldView) -> Vec<String> {
    vec![
        "déclare sur l'honneur n'avoir fait l'objet d'aucune condamnation pénale \
         inscrite au bulletin n° 3 du casier judiciaire."
            .to_string(),
    ]
}
