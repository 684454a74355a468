//! Date validator

use attestkit_core::diagnostics::Diagnostic;
use attestkit_core::format::parse_date;
use attestkit_model::{FieldKind, FieldName};

use crate::{Submission, Validator};

const BIRTH_DATES: [FieldName; 3] = [
    FieldName::DateNaissance,
    FieldName::PartnerDateNaissance,
    FieldName::BeneficiaireDateNaissance,
];

/// Checks date fields
///
/// # Diagnostic Codes
///
/// - `ATT201`: Date is not in `AAAA-MM-JJ` form (warning; renders as `[Date]`)
/// - `ATT202`: End date before start date (error)
/// - `ATT203`: Birth date in the future (warning)
pub struct DateValidator;

impl Validator for DateValidator {
    fn code(&self) -> &'static str {
        "ATT2"
    }

    fn name(&self) -> &'static str {
        "dates"
    }

    fn validate(&self, submission: &Submission) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (spec, value) in submission.filled() {
            if spec.kind != FieldKind::Date {
                continue;
            }
            match parse_date(value) {
                None => diagnostics.push(
                    Diagnostic::warning(format!(
                        "Date invalide pour « {} » : {}",
                        spec.label, value
                    ))
                    .with_code("ATT201")
                    .with_field(spec.name)
                    .with_help("Format attendu : AAAA-MM-JJ"),
                ),
                Some(date) if BIRTH_DATES.contains(&spec.name) && date > submission.today => {
                    diagnostics.push(
                        Diagnostic::warning(format!(
                            "La date « {} » est dans le futur",
                            spec.label
                        ))
                        .with_code("ATT203")
                        .with_field(spec.name),
                    )
                }
                Some(_) => {}
            }
        }

        let start = submission.value(FieldName::DateDebut).and_then(parse_date);
        let end = submission.value(FieldName::DateFin).and_then(parse_date);
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                diagnostics.push(
                    Diagnostic::error("La date de fin précède la date de début")
                        .with_code("ATT202")
                        .with_field(FieldName::DateFin)
                        .with_note(format!(
                            "Début : {}, fin : {}",
                            start.format("%d/%m/%Y"),
                            end.format("%d/%m/%Y")
                        )),
                );
            }
        }

        diagnostics
    }
}
