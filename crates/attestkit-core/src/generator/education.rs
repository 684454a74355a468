//! School and training documents

use attestkit_model::FieldName;

use super::view::FieldView;

/// Non-empty lines of a multi-line value, joined with `" ; "`
fn exam_list(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ; ")
}

pub(super) fn scolarite(v: &FieldView) -> Vec<String> {
    vec![format!(
        "est régulièrement inscrit{} en {} dans notre établissement pour l'année scolaire {}.",
        v.agreement().e(),
        v.text(FieldName::Classe),
        v.text(FieldName::AnneeScolaire)
    )]
}

pub(super) fn reussite(v: &FieldView) -> Vec<String> {
    let mut diploma = v.text(FieldName::Diplome);
    if let Some(mention) = v.get(FieldName::Mention) {
        diploma.push_str(&format!(", mention {}", mention));
    }
    if let Some(session) = v.get(FieldName::SessionExamen) {
        diploma.push_str(&format!(", session {}", session));
    }
    let mut clauses = vec![format!("a obtenu le diplôme suivant : {}.", diploma)];
    if let Some(exams) = v.get(FieldName::ExamList) {
        clauses.push(format!("Épreuves réussies : {}.", exam_list(exams)));
    }
    clauses
}

pub(super) fn assiduite(v: &FieldView) -> Vec<String> {
    let period = match v.get(FieldName::DateFin) {
        Some(_) => format!(
            "du {} au {}",
            v.date(FieldName::DateDebut),
            v.date(FieldName::DateFin)
        ),
        None => format!("depuis le {}", v.date(FieldName::DateDebut)),
    };
    let mut clauses = vec![format!(
        "suit avec assiduité la formation {} dispensée dans notre établissement, {}.",
        v.text(FieldName::Formation),
        period
    )];
    if let Some(rate) = v.get(FieldName::TauxAssiduite) {
        clauses.push(format!(
            "Son taux d'assiduité sur cette période est de {} %.",
            rate.trim_end_matches('%').trim()
        ));
    }
    clauses
}

pub(super) fn inscription(v: &FieldView) -> Vec<String> {
    vec![format!(
        "est inscrit{} en {} dans notre établissement pour l'année {}.",
        v.agreement().e(),
        v.text(FieldName::Formation),
        v.text(FieldName::AnneeScolaire)
    )]
}
