//! attestkit-core - Registry, field rules and content generation
//!
//! The engine behind attestkit's forms: a closed registry of document types,
//! the rule engine deciding which fields each type shows, and the generator
//! producing a renderer-agnostic [`DocumentBody`](attestkit_model::DocumentBody).
//!
//! # Example
//!
//! ```
//! use attestkit_core::{compute_field_specs, generate, GenerationContext};
//! use attestkit_model::{DocumentTypeId, FieldName, FieldValues};
//! use chrono::NaiveDate;
//!
//! let values = FieldValues::from_pairs([
//!     (FieldName::Civility, "Madame"),
//!     (FieldName::Prenom, "Claire"),
//!     (FieldName::Nom, "Dupont"),
//!     (FieldName::DateDebut, "2022-01-10"),
//! ]);
//! let id = DocumentTypeId::AttestationTravail;
//!
//! let specs = compute_field_specs(id, &values);
//! assert!(specs.iter().any(|s| s.name == FieldName::Poste && s.required));
//!
//! let ctx = GenerationContext::new(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
//! let body = generate(id, &values, &ctx);
//! assert!(body.subject_line.contains("Mme Claire Dupont"));
//! ```

pub mod diagnostics;
pub mod error;
pub mod format;
pub mod generator;
pub mod registry;
pub mod rules;
pub mod session;

pub use error::{CoreError, Result};
pub use generator::{
    generate, generate_by_key, generate_traced, signature_role, GenerationContext, SignatureRole,
    TracedBody,
};
pub use registry::{
    descriptor, filter_types, find_type, list_categories, list_types, popular_types, resolve,
    types_in_category, CategoryFilter, DocumentTypeDescriptor, Issuer,
};
pub use rules::{compute_field_specs, missing_required, scoped_values, visible_fields};
pub use session::{FormSession, Profile};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "1.0.0");
    }
}
