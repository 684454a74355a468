//! Required field validator

use attestkit_core::diagnostics::Diagnostic;
use attestkit_core::missing_required;

use crate::{Submission, Validator};

/// Reports required fields left empty
///
/// # Diagnostic Codes
///
/// - `ATT101`: Required field is empty (error)
pub struct RequiredFieldsValidator;

impl Validator for RequiredFieldsValidator {
    fn code(&self) -> &'static str {
        "ATT1"
    }

    fn name(&self) -> &'static str {
        "required-fields"
    }

    fn validate(&self, submission: &Submission) -> Vec<Diagnostic> {
        missing_required(&submission.specs, submission.values)
            .into_iter()
            .map(|spec| {
                Diagnostic::error(format!("Le champ « {} » est obligatoire", spec.label))
                    .with_code("ATT101")
                    .with_field(spec.name)
                    .with_note(format!("Section : {}", spec.section.title()))
            })
            .collect()
    }
}
