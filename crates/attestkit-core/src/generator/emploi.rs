//! Employment documents
//!
//! The subject is the employee; the document is issued by the company.

use attestkit_model::FieldName;

use super::view::FieldView;
use super::GenerationContext;

/// `un contrat CDI à temps plein`
fn contract(v: &FieldView) -> String {
    let mut text = format!("un contrat {}", v.text(FieldName::TypeContrat));
    if let Some(time) = v.get(FieldName::TempsTravail) {
        text.push_str(&format!(" à {}", time.to_lowercase()));
    }
    text
}

/// Whether the period ended before `today`
///
/// An unparsable end date counts as not yet reached.
fn has_ended(v: &FieldView, ctx: &GenerationContext) -> bool {
    v.parsed_date(FieldName::DateFin)
        .map(|end| end < ctx.today)
        .unwrap_or(false)
}

pub(super) fn travail(v: &FieldView, ctx: &GenerationContext) -> Vec<String> {
    let a = v.agreement();
    let mut clauses = vec![format!(
        "est employé{} au sein de notre société depuis le {} en qualité de {}, dans le cadre d'{}.",
        a.e(),
        v.date(FieldName::DateDebut),
        v.text(FieldName::Poste),
        contract(v)
    )];
    if v.get(FieldName::DateFin).is_some() {
        let verb = if has_ended(v, ctx) {
            "a pris fin"
        } else {
            "prendra fin"
        };
        clauses.push(format!(
            "Ce contrat {} le {}.",
            verb,
            v.date(FieldName::DateFin)
        ));
    }
    clauses
}

pub(super) fn salaire(v: &FieldView) -> Vec<String> {
    let a = v.agreement();
    let since = match v.get(FieldName::DateDebut) {
        Some(_) => format!(" depuis le {}", v.date(FieldName::DateDebut)),
        None => String::new(),
    };
    vec![
        format!(
            "est employé{} au sein de notre société{} en qualité de {}.",
            a.e(),
            since,
            v.text(FieldName::Poste)
        ),
        format!(
            "Sa rémunération mensuelle s'élève à {} brut, soit {} net.",
            v.amount(FieldName::SalaryGross),
            v.amount(FieldName::SalaryNet)
        ),
    ]
}

pub(super) fn certificat(v: &FieldView) -> Vec<String> {
    let a = v.agreement();
    let contract = match v.get(FieldName::TypeContrat) {
        Some(kind) => format!(", sous contrat {}", kind),
        None => String::new(),
    };
    vec![
        format!(
            "a été employé{} au sein de notre société du {} au {}{}.",
            a.e(),
            v.date(FieldName::DateDebut),
            v.date(FieldName::DateFin),
            contract
        ),
        format!(
            "{} y occupait en dernier lieu le poste de {}.",
            a.pronoun(),
            v.text(FieldName::Poste)
        ),
        format!(
            "{} quitte l'entreprise libre de tout engagement.",
            a.pronoun()
        ),
    ]
}

pub(super) fn promesse(v: &FieldView) -> Vec<String> {
    let mut clauses = vec![format!(
        "au poste de {}, dans le cadre d'{}, à compter du {}.",
        v.text(FieldName::Poste),
        contract(v),
        v.date(FieldName::DateDebut)
    )];
    if v.get(FieldName::DateFin).is_some() {
        clauses.push(format!(
            "Le contrat prendra fin le {}.",
            v.date(FieldName::DateFin)
        ));
    }
    if v.get(FieldName::SalaryGross).is_some() {
        clauses.push(format!(
            "La rémunération brute mensuelle proposée est de {}.",
            v.amount(FieldName::SalaryGross)
        ));
    }
    clauses.push("La présente promesse vaut engagement ferme de notre part.".to_string());
    clauses
}

pub(super) fn stage(v: &FieldView, ctx: &GenerationContext) -> Vec<String> {
    let a = v.agreement();
    let verb = if has_ended(v, ctx) {
        "a effectué"
    } else {
        "effectue"
    };
    let school = match v.get(FieldName::Etablissement) {
        Some(school) => format!(" suivie à {}", school),
        None => String::new(),
    };
    let mut clauses = vec![format!(
        "{} un stage au sein de notre société du {} au {}, dans le cadre de la formation {}{}.",
        verb,
        v.date(FieldName::DateDebut),
        v.date(FieldName::DateFin),
        v.text(FieldName::Formation),
        school
    )];
    if let Some(missions) = v.get(FieldName::Poste) {
        clauses.push(format!(
            "Au cours de ce stage, {} a été chargé{} de : {}.",
            a.pronoun().to_lowercase(),
            a.e(),
            missions
        ));
    }
    clauses
}
