//! Plain Rust side of the bindings
//!
//! Every function here takes already-decoded inputs and returns serializable
//! outputs, so it can be tested natively. `lib.rs` only converts at the JS
//! boundary.

use serde::Serialize;

use attestkit_core::diagnostics::Diagnostic;
use attestkit_core::format::parse_date;
use attestkit_core::registry::CategoryFilter;
use attestkit_core::{
    compute_field_specs, generate, resolve, scoped_values, CoreError, DocumentTypeDescriptor,
    GenerationContext,
};
use attestkit_model::{Category, DocumentBody, FieldSpec, FieldValues};
use attestkit_render::{
    export_filename, render_exportable, render_preview, ExportDocument, ExportSettings,
    PreviewNode,
};
use attestkit_validate::{Submission, ValidationEngine};

/// Validation outcome as seen by the form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub has_errors: bool,
    pub diagnostics: Vec<Diagnostic>,
}

/// Generation date: the given `YYYY-MM-DD` day, or the local date
pub fn context(today: Option<&str>) -> GenerationContext {
    today
        .and_then(parse_date)
        .map(GenerationContext::new)
        .unwrap_or_else(GenerationContext::current)
}

pub fn list_types() -> &'static [DocumentTypeDescriptor] {
    attestkit_core::list_types()
}

pub fn list_categories() -> &'static [Category] {
    attestkit_core::list_categories()
}

pub fn filter_types(
    query: &str,
    category: &str,
) -> Result<Vec<&'static DocumentTypeDescriptor>, CoreError> {
    let filter: CategoryFilter = category.parse()?;
    Ok(attestkit_core::filter_types(query, filter))
}

pub fn field_specs(key: &str, values: &FieldValues) -> Result<Vec<FieldSpec>, CoreError> {
    Ok(compute_field_specs(resolve(key)?, values))
}

pub fn generate_body(
    key: &str,
    values: &FieldValues,
    ctx: &GenerationContext,
) -> Result<DocumentBody, CoreError> {
    Ok(generate(resolve(key)?, values, ctx))
}

pub fn preview(
    key: &str,
    values: &FieldValues,
    ctx: &GenerationContext,
) -> Result<PreviewNode, CoreError> {
    let id = resolve(key)?;
    let scoped = scoped_values(id, values);
    Ok(render_preview(&generate(id, &scoped, ctx), &scoped))
}

pub fn exportable(
    key: &str,
    values: &FieldValues,
    ctx: &GenerationContext,
    settings: &ExportSettings,
) -> Result<ExportDocument, CoreError> {
    let id = resolve(key)?;
    let scoped = scoped_values(id, values);
    Ok(render_exportable(&generate(id, &scoped, ctx), &scoped, settings))
}

pub fn filename(values: &FieldValues, extension: &str) -> String {
    export_filename(values, extension)
}

pub fn validate(
    key: &str,
    values: &FieldValues,
    ctx: &GenerationContext,
) -> Result<ValidationReport, CoreError> {
    let id = resolve(key)?;
    let submission = Submission::new(id, values, ctx.today);
    let diagnostics = ValidationEngine::with_defaults().validate(&submission);
    Ok(ValidationReport {
        has_errors: diagnostics.has_errors(),
        diagnostics: diagnostics.iter().cloned().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use attestkit_model::FieldName;
    use attestkit_render::{export_text, normalize_whitespace, preview_text};
    use chrono::NaiveDate;

    fn ctx() -> GenerationContext {
        context(Some("2024-03-05"))
    }

    #[test]
    fn test_context_from_string() {
        assert_eq!(ctx().today, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn test_unknown_key_message() {
        let err = generate_body("attestation_inconnue", &FieldValues::new(), &ctx()).unwrap_err();
        assert!(err.to_string().contains("attestation_inconnue"));
        assert!(matches!(err, CoreError::UnknownDocumentType(_)));
    }

    #[test]
    fn test_filter_by_category_key() {
        let all = filter_types("", "all").unwrap();
        assert_eq!(all.len(), list_types().len());
        assert!(filter_types("", "voyage").is_err());
    }

    #[test]
    fn test_preview_matches_export() {
        let values = FieldValues::from_pairs([
            (FieldName::Prenom, "Jean"),
            (FieldName::Nom, "Martin"),
        ]);
        let preview = preview("attestation_hebergement", &values, &ctx()).unwrap();
        let export = exportable(
            "attestation_hebergement",
            &values,
            &ctx(),
            &ExportSettings::default(),
        )
        .unwrap();
        assert_eq!(
            normalize_whitespace(&preview_text(&preview)),
            normalize_whitespace(&export_text(&export))
        );
    }

    #[test]
    fn test_validate_empty_record() {
        let report = validate("attestation_celibat", &FieldValues::new(), &ctx()).unwrap();
        assert!(report.has_errors);
        assert!(report
            .diagnostics
            .iter()
            .any(|d| d.code.as_deref() == Some("ATT101")));
    }
}
