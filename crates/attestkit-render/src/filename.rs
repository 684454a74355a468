//! Export file naming

use attestkit_model::{FieldName, FieldValues};

/// `Attestation_{nom}.{ext}`, with `Document` when no last name is set
///
/// Characters other than letters, digits, `-` and `_` become `_`.
///
/// ```
/// use attestkit_model::{FieldName, FieldValues};
/// use attestkit_render::export_filename;
///
/// let values = FieldValues::new().with(FieldName::Nom, "Le Gall");
/// assert_eq!(export_filename(&values, "pdf"), "Attestation_Le_Gall.pdf");
/// assert_eq!(export_filename(&FieldValues::new(), "pdf"), "Attestation_Document.pdf");
/// ```
pub fn export_filename(values: &FieldValues, extension: &str) -> String {
    let stem: String = values
        .get(FieldName::Nom)
        .unwrap_or("Document")
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let extension = extension.trim().trim_start_matches('.');
    let extension = if extension.is_empty() { "pdf" } else { extension };
    format!("Attestation_{}.{}", stem, extension)
}
