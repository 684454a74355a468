//! Housing documents

use attestkit_model::FieldName;

use super::view::FieldView;
use super::GenerationContext;
use crate::format::{format_naive_date, format_total, sum_amounts};

pub(super) fn hebergement(v: &FieldView) -> Vec<String> {
    let mut guest = format!(
        "{} {}",
        v.text(FieldName::BeneficiairePrenom),
        v.text(FieldName::BeneficiaireNom)
    );
    if v.get(FieldName::BeneficiaireDateNaissance).is_some() {
        guest.push_str(&format!(
            ", né(e) le {}",
            v.date(FieldName::BeneficiaireDateNaissance)
        ));
    }
    if let Some(link) = v.get(FieldName::LienParente) {
        guest.push_str(&format!(" (lien de parenté : {})", link));
    }
    let until = match v.get(FieldName::DateFin) {
        Some(_) => format!(" et jusqu'au {}", v.date(FieldName::DateFin)),
        None => String::new(),
    };
    vec![format!(
        "déclare sur l'honneur héberger à mon domicile {} depuis le {}{}.",
        guest,
        v.date(FieldName::DateDebut),
        until
    )]
}

pub(super) fn quittance(v: &FieldView) -> Vec<String> {
    let rent = v.get(FieldName::RentAmount);
    let charges = v.get(FieldName::ChargesAmount);
    let total = sum_amounts([rent, charges]);

    let mut clauses = vec![
        format!(
            "la somme de {} au titre du loyer et des charges pour la période de {}, soit :",
            format_total(total),
            v.text(FieldName::RentPeriod)
        ),
        format!("Loyer hors charges : {}", v.amount(FieldName::RentAmount)),
        format!("Charges : {}", format_total(sum_amounts([charges]))),
    ];
    if v.get(FieldName::PaymentDate).is_some() {
        clauses.push(format!(
            "Paiement reçu le {}.",
            v.date(FieldName::PaymentDate)
        ));
    }
    clauses
}

pub(super) fn justificatif(v: &FieldView) -> Vec<String> {
    let since = match v.get(FieldName::DateDebut) {
        Some(_) => format!(" depuis le {}", v.date(FieldName::DateDebut)),
        None => String::new(),
    };
    vec![format!(
        "déclare sur l'honneur résider de manière effective à l'adresse indiquée ci-dessus{}.",
        since
    )]
}

pub(super) fn loyer_a_jour(v: &FieldView, ctx: &GenerationContext) -> Vec<String> {
    let since = match v.get(FieldName::DateDebut) {
        Some(_) => format!(", depuis le {}", v.date(FieldName::DateDebut)),
        None => String::new(),
    };
    let mut rent = format!(
        "Le loyer mensuel s'élève à {} hors charges",
        v.amount(FieldName::RentAmount)
    );
    if v.get(FieldName::ChargesAmount).is_some() {
        rent.push_str(&format!(
            ", auxquels s'ajoutent {} de charges",
            v.amount(FieldName::ChargesAmount)
        ));
    }
    rent.push('.');
    vec![
        format!(
            "locataire de ce logement{}, est à jour du paiement de ses loyers et charges à la date du {}.",
            since,
            format_naive_date(ctx.today)
        ),
        rent,
    ]
}
