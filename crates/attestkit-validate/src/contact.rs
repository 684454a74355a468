//! Contact and registration format validator

use std::sync::OnceLock;

use regex::Regex;

use attestkit_core::diagnostics::Diagnostic;
use attestkit_model::FieldName;

use crate::{Submission, Validator};

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static SIRET_RE: OnceLock<Regex> = OnceLock::new();
static POSTAL_CODE_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern"))
}

fn siret_re() -> &'static Regex {
    SIRET_RE.get_or_init(|| Regex::new(r"^\d{14}$").expect("siret pattern"))
}

fn postal_code_re() -> &'static Regex {
    POSTAL_CODE_RE.get_or_init(|| Regex::new(r"^\d{5}$").expect("postal code pattern"))
}

/// Checks formats of contact and registration fields
///
/// # Diagnostic Codes
///
/// - `ATT401`: Malformed e-mail address
/// - `ATT402`: SIRET is not 14 digits
/// - `ATT403`: Postal code is not 5 digits
///
/// All are warnings: the document can still be produced.
pub struct ContactValidator;

impl Validator for ContactValidator {
    fn code(&self) -> &'static str {
        "ATT4"
    }

    fn name(&self) -> &'static str {
        "contact"
    }

    fn validate(&self, submission: &Submission) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if let Some(email) = submission.value(FieldName::Email) {
            if !email_re().is_match(email) {
                diagnostics.push(
                    Diagnostic::warning(format!("Adresse e-mail invalide : {}", email))
                        .with_code("ATT401")
                        .with_field(FieldName::Email),
                );
            }
        }

        if let Some(siret) = submission.value(FieldName::Siret) {
            let digits: String = siret.chars().filter(|c| !c.is_whitespace()).collect();
            if !siret_re().is_match(&digits) {
                diagnostics.push(
                    Diagnostic::warning("Le numéro SIRET doit comporter 14 chiffres")
                        .with_code("ATT402")
                        .with_field(FieldName::Siret)
                        .with_note(format!("Valeur saisie : {}", siret)),
                );
            }
        }

        if let Some(code) = submission.value(FieldName::CodePostal) {
            if !postal_code_re().is_match(code) {
                diagnostics.push(
                    Diagnostic::warning("Le code postal doit comporter 5 chiffres")
                        .with_code("ATT403")
                        .with_field(FieldName::CodePostal),
                );
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attestkit_model::{DocumentTypeId, FieldValues};
    use chrono::NaiveDate;

    fn codes(id: DocumentTypeId, values: &FieldValues) -> Vec<String> {
        let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        ContactValidator
            .validate(&Submission::new(id, values, today))
            .into_iter()
            .filter_map(|d| d.code)
            .collect()
    }

    #[test]
    fn test_valid_formats() {
        let values = FieldValues::from_pairs([
            (FieldName::Email, "claire.dupont@exemple.fr"),
            (FieldName::Siret, "732 829 320 00074"),
        ]);
        assert!(codes(DocumentTypeId::AttestationTravail, &values).is_empty());
    }

    #[test]
    fn test_invalid_formats() {
        let values = FieldValues::from_pairs([
            (FieldName::Email, "claire.dupont"),
            (FieldName::Siret, "12345"),
        ]);
        assert_eq!(
            codes(DocumentTypeId::AttestationTravail, &values),
            vec!["ATT401", "ATT402"]
        );
    }

    #[test]
    fn test_postal_code() {
        let values = FieldValues::new().with(FieldName::CodePostal, "7500");
        assert_eq!(
            codes(DocumentTypeId::JustificatifDomicile, &values),
            vec!["ATT403"]
        );
        // hidden for employment documents
        assert!(codes(DocumentTypeId::AttestationTravail, &values).is_empty());
    }
}
