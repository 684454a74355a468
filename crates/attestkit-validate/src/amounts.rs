//! Amount validator

use attestkit_core::diagnostics::Diagnostic;
use attestkit_core::format::parse_amount;
use attestkit_model::FieldKind;

use crate::{Submission, Validator};

/// Checks numeric fields
///
/// # Diagnostic Codes
///
/// - `ATT301`: Value is not a number (warning; counts as zero in totals)
/// - `ATT302`: Negative amount (error)
pub struct AmountValidator;

impl Validator for AmountValidator {
    fn code(&self) -> &'static str {
        "ATT3"
    }

    fn name(&self) -> &'static str {
        "amounts"
    }

    fn validate(&self, submission: &Submission) -> Vec<Diagnostic> {
        submission
            .filled()
            .filter(|(spec, _)| spec.kind == FieldKind::Number)
            .filter_map(|(spec, value)| match parse_amount(value) {
                None => Some(
                    Diagnostic::warning(format!(
                        "« {} » n'est pas un nombre : {}",
                        spec.label, value
                    ))
                    .with_code("ATT301")
                    .with_field(spec.name)
                    .with_help("Exemple : 1250,50"),
                ),
                Some(amount) if amount.is_sign_negative() && !amount.is_zero() => Some(
                    Diagnostic::error(format!("« {} » ne peut pas être négatif", spec.label))
                        .with_code("ATT302")
                        .with_field(spec.name),
                ),
                Some(_) => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attestkit_model::{DocumentTypeId, FieldName, FieldValues};
    use chrono::NaiveDate;

    fn check(values: &FieldValues) -> Vec<Diagnostic> {
        let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        AmountValidator.validate(&Submission::new(DocumentTypeId::QuittanceLoyer, values, today))
    }

    #[test]
    fn test_french_decimal_accepted() {
        let values = FieldValues::from_pairs([
            (FieldName::RentAmount, "1 250,50"),
            (FieldName::ChargesAmount, "80 €"),
        ]);
        assert!(check(&values).is_empty());
    }

    #[test]
    fn test_not_a_number() {
        let values = FieldValues::new().with(FieldName::RentAmount, "cinq cents");
        let diagnostics = check(&values);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code.as_deref(), Some("ATT301"));
        assert_eq!(diagnostics[0].field, Some(FieldName::RentAmount));
    }

    #[test]
    fn test_negative_amount() {
        let values = FieldValues::new().with(FieldName::ChargesAmount, "-20");
        let diagnostics = check(&values);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].is_error());
        assert_eq!(diagnostics[0].code.as_deref(), Some("ATT302"));
    }
}
