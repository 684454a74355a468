//! attestkit-render - Preview and export rendering
//!
//! Two adapters over the same [`DocumentBody`]:
//!
//! - [`render_preview`] builds a node tree for the live form preview,
//! - [`render_exportable`] lays the document out on fixed pages for the
//!   encoding collaborator.
//!
//! Both share the [`Letterhead`], the [`SignatureArea`] and the footer, so
//! their visible text is identical once whitespace is normalized.
//!
//! # Example
//!
//! ```
//! use attestkit_core::GenerationContext;
//! use attestkit_model::{DocumentTypeId, FieldName, FieldValues};
//! use attestkit_render::{
//!     export_text, normalize_whitespace, preview_text, render_document, RenderSettings,
//! };
//! use chrono::NaiveDate;
//!
//! let values = FieldValues::new().with(FieldName::Nom, "Dupont");
//! let ctx = GenerationContext::new(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
//! let rendered = render_document(
//!     DocumentTypeId::JustificatifDomicile,
//!     &values,
//!     &ctx,
//!     &RenderSettings::default(),
//! );
//!
//! assert_eq!(
//!     normalize_whitespace(&preview_text(&rendered.preview)),
//!     normalize_whitespace(&export_text(&rendered.export)),
//! );
//! assert_eq!(rendered.filename, "Attestation_Dupont.pdf");
//! ```

pub mod error;
pub mod export;
pub mod filename;
pub mod letterhead;
pub mod preview;
pub mod settings;
pub mod signature;
pub mod text;

use serde::Serialize;

use attestkit_core::{generate, scoped_values, GenerationContext};
use attestkit_model::{DocumentBody, DocumentTypeId, FieldValues};

pub use error::{RenderError, Result};
pub use export::{export_text, render_exportable, ExportBlock, ExportDocument, ExportPage};
pub use filename::export_filename;
pub use letterhead::Letterhead;
pub use preview::{preview_text, render_preview, PreviewNode, TextRole};
pub use settings::{ExportSettings, PdfSettings, RenderSettings};
pub use signature::SignatureArea;
pub use text::normalize_whitespace;

/// Both renderings of one document, generated once
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedDocument {
    pub body: DocumentBody,
    pub preview: PreviewNode,
    pub export: ExportDocument,
    pub filename: String,
}

/// Generate and render a document
///
/// Values of fields hidden for `id` are left out of the letterhead and the
/// signature area, as they are out of the body.
pub fn render_document(
    id: DocumentTypeId,
    values: &FieldValues,
    ctx: &GenerationContext,
    settings: &RenderSettings,
) -> RenderedDocument {
    let scoped = scoped_values(id, values);
    let body = generate(id, &scoped, ctx);
    RenderedDocument {
        preview: render_preview(&body, &scoped),
        export: render_exportable(&body, &scoped, &settings.export),
        filename: export_filename(&scoped, &settings.export.extension),
        body,
    }
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
