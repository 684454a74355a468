//! attestkit-validate - Submission checks
//!
//! A pluggable engine that inspects a filled form before the document is
//! produced. Only fields visible for the selected document type are
//! checked; values kept from another type are ignored.
//!
//! # Architecture
//!
//! Each check implements [`Validator`] and owns a code prefix (`ATT1` for
//! required fields, `ATT2` for dates, ...). The [`ValidationEngine`] runs
//! every registered validator and collects the diagnostics. Errors should
//! block submission; warnings are shown but do not.
//!
//! # Example
//!
//! ```
//! use attestkit_model::{DocumentTypeId, FieldName, FieldValues};
//! use attestkit_validate::{Submission, ValidationEngine};
//! use chrono::NaiveDate;
//!
//! let values = FieldValues::new().with(FieldName::Nom, "Dupont");
//! let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
//! let submission = Submission::new(DocumentTypeId::AttestationCelibat, &values, today);
//!
//! let engine = ValidationEngine::with_defaults();
//! assert!(engine.has_errors(&submission));
//! ```

pub mod amounts;
pub mod contact;
pub mod dates;
pub mod required;

use chrono::NaiveDate;

use attestkit_core::compute_field_specs;
use attestkit_core::diagnostics::{Diagnostic, Diagnostics};
use attestkit_model::{DocumentTypeId, FieldName, FieldSpec, FieldValues};

pub use amounts::AmountValidator;
pub use contact::ContactValidator;
pub use dates::DateValidator;
pub use required::RequiredFieldsValidator;

/// A form about to be submitted
///
/// Carries the field specs for the current values so every validator sees
/// the same visibility.
pub struct Submission<'a> {
    pub id: DocumentTypeId,
    pub values: &'a FieldValues,
    pub specs: Vec<FieldSpec>,
    pub today: NaiveDate,
}

impl<'a> Submission<'a> {
    pub fn new(id: DocumentTypeId, values: &'a FieldValues, today: NaiveDate) -> Self {
        Self {
            id,
            values,
            specs: compute_field_specs(id, values),
            today,
        }
    }

    /// Spec of a visible field
    pub fn spec(&self, name: FieldName) -> Option<&FieldSpec> {
        self.specs.iter().find(|s| s.name == name)
    }

    /// Value of a field, only if the field is visible
    pub fn value(&self, name: FieldName) -> Option<&'a str> {
        self.spec(name)?;
        self.values.get(name)
    }

    /// Visible fields holding a value, in presentation order
    pub fn filled(&self) -> impl Iterator<Item = (&FieldSpec, &'a str)> + '_ {
        let values = self.values;
        self.specs
            .iter()
            .filter_map(move |s| values.get(s.name).map(|v| (s, v)))
    }
}

/// Trait for submission validators
///
/// Validators inspect a submission and return a list of diagnostics for
/// any issues found. Each validator has a unique code prefix for its
/// diagnostics.
pub trait Validator: Send + Sync {
    /// Get the validator's unique code prefix (e.g., "ATT2" for dates)
    fn code(&self) -> &'static str;

    /// Get a human-readable name for this validator
    fn name(&self) -> &'static str {
        "unnamed"
    }

    /// Validate the submission and return any diagnostics
    fn validate(&self, submission: &Submission) -> Vec<Diagnostic>;
}

/// Validation engine that orchestrates multiple validators
pub struct ValidationEngine {
    validators: Vec<Box<dyn Validator>>,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationEngine {
    /// Create a new empty validation engine
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Create an engine with every built-in validator
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_validator(Box::new(RequiredFieldsValidator));
        engine.add_validator(Box::new(DateValidator));
        engine.add_validator(Box::new(AmountValidator));
        engine.add_validator(Box::new(ContactValidator));
        engine
    }

    /// Add a validator to the engine
    pub fn add_validator(&mut self, validator: Box<dyn Validator>) {
        self.validators.push(validator);
    }

    /// Get the number of registered validators
    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    /// Get the names of all registered validators
    pub fn validator_names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Run every registered validator
    pub fn validate(&self, submission: &Submission) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        for validator in &self.validators {
            diagnostics.extend(validator.validate(submission));
        }
        log::debug!(
            "{}: {} errors, {} warnings",
            submission.id,
            diagnostics.error_count(),
            diagnostics.warning_count()
        );
        diagnostics
    }

    /// Check if a submission has any errors
    pub fn has_errors(&self, submission: &Submission) -> bool {
        self.validate(submission).has_errors()
    }

    /// Check if a submission has any warnings or errors
    pub fn has_issues(&self, submission: &Submission) -> bool {
        !self.validate(submission).is_empty()
    }
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
