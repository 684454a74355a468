//! attestkit-pdf - PDF encoding via Typst
//!
//! Encodes the paginated [`ExportDocument`] produced by `attestkit-render`
//! into PDF bytes, using Typst as the typesetting backend.
//!
//! # Architecture
//!
//! 1. **Transpiler** - Converts an `ExportDocument` to Typst markup,
//!    one `#pagebreak()` per layout page
//! 2. **Compiler** - Compiles Typst markup to PDF bytes
//!
//! # Example
//!
//! ```ignore
//! use attestkit_core::GenerationContext;
//! use attestkit_model::{DocumentTypeId, FieldValues};
//! use attestkit_pdf::export_pdf;
//! use attestkit_render::RenderSettings;
//!
//! let pdf = export_pdf(
//!     DocumentTypeId::AttestationHebergement,
//!     &FieldValues::new(),
//!     &GenerationContext::current(),
//!     &RenderSettings::default(),
//! )?;
//! std::fs::write(&pdf.filename, &pdf.bytes)?;
//! ```

mod compiler;
mod error;
mod transpiler;

pub use compiler::Compiler;
pub use error::{PdfError, Result};
pub use transpiler::Transpiler;

use attestkit_core::GenerationContext;
use attestkit_model::{DocumentTypeId, FieldValues};
use attestkit_render::{render_document, ExportDocument, PdfSettings, RenderSettings};

/// An encoded document ready to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfExport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Encode an exported document to PDF
pub fn render_pdf(doc: &ExportDocument, settings: &PdfSettings) -> Result<Vec<u8>> {
    let typst_markup = Transpiler::transpile(doc);
    Compiler::compile_with_fonts(&typst_markup, settings.font_paths.as_slice())
}

/// Generate, lay out and encode a document in one call
pub fn export_pdf(
    id: DocumentTypeId,
    values: &FieldValues,
    ctx: &GenerationContext,
    settings: &RenderSettings,
) -> Result<PdfExport> {
    let rendered = render_document(id, values, ctx, settings);
    let bytes = render_pdf(&rendered.export, &settings.pdf)?;
    log::info!("exported {} ({} bytes)", rendered.filename, bytes.len());
    Ok(PdfExport {
        filename: rendered.filename,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use attestkit_model::FieldName;
    use chrono::NaiveDate;

    #[test]
    fn test_export_pdf() {
        let values = FieldValues::from_pairs([
            (FieldName::Civility, "Monsieur"),
            (FieldName::Prenom, "Jean"),
            (FieldName::Nom, "Martin"),
        ]);
        let ctx = GenerationContext::new(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        let pdf = export_pdf(
            DocumentTypeId::AttestationCelibat,
            &values,
            &ctx,
            &RenderSettings::default(),
        );
        assert!(pdf.is_ok(), "Export failed: {:?}", pdf.err());
        let pdf = pdf.unwrap();
        assert_eq!(pdf.filename, "Attestation_Martin.pdf");
        assert!(pdf.bytes.starts_with(b"%PDF"));
    }
}
