//! Exportable rendering
//!
//! Lays the document out on fixed-size pages. Block heights are estimated
//! in text lines from [`ExportSettings`]; the encoding collaborator turns
//! the result into its final format. Page numbers are layout data, never
//! part of the text.

use serde::Serialize;

use attestkit_model::{DocumentBody, FieldValues};

use crate::letterhead::Letterhead;
use crate::preview::{body_paragraphs, TextRole};
use crate::settings::ExportSettings;
use crate::signature::SignatureArea;
use crate::text::join_lines;

/// Lines taken by the empty signature box or the stamp frame
const SIGNATURE_BOX_LINES: usize = 4;

/// A block laid out on a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ExportBlock {
    Text { role: TextRole, text: String },
    Signature { area: SignatureArea },
}

/// One page of the export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPage {
    /// 1-based page number
    pub number: usize,
    pub blocks: Vec<ExportBlock>,
}

/// The paginated document handed to the encoder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub title: String,
    /// Printed on the first page only
    pub letterhead: Letterhead,
    pub pages: Vec<ExportPage>,
    /// Printed at the bottom of every page
    pub footer: Option<String>,
}

impl ExportDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page holding the signature area
    pub fn signature_page(&self) -> Option<usize> {
        self.pages
            .iter()
            .find(|p| {
                p.blocks
                    .iter()
                    .any(|b| matches!(b, ExportBlock::Signature { .. }))
            })
            .map(|p| p.number)
    }
}

fn text_height(text: &str, chars_per_line: usize) -> usize {
    let chars = text.chars().count();
    chars.div_ceil(chars_per_line).max(1)
}

fn block_height(block: &ExportBlock, settings: &ExportSettings) -> usize {
    // One blank line separates consecutive blocks
    1 + match block {
        ExportBlock::Text { text, .. } => text_height(text, settings.chars_per_line()),
        ExportBlock::Signature { area } => {
            area.lines()
                .iter()
                .map(|l| text_height(l, settings.chars_per_line()))
                .sum::<usize>()
                + SIGNATURE_BOX_LINES
        }
    }
}

/// Distribute blocks over pages; a block is never split
fn paginate(
    blocks: Vec<ExportBlock>,
    first_page_offset: usize,
    settings: &ExportSettings,
) -> Vec<ExportPage> {
    let capacity = settings.lines_per_page();
    let mut pages = Vec::new();
    let mut current = ExportPage {
        number: 1,
        blocks: Vec::new(),
    };
    let mut used = first_page_offset;

    for block in blocks {
        let height = block_height(&block, settings);
        if used + height > capacity && !current.blocks.is_empty() {
            let number = current.number + 1;
            pages.push(std::mem::replace(
                &mut current,
                ExportPage {
                    number,
                    blocks: Vec::new(),
                },
            ));
            used = 0;
        }
        used += height;
        current.blocks.push(block);
    }
    pages.push(current);
    pages
}

/// Render the paginated export
pub fn render_exportable(
    body: &DocumentBody,
    values: &FieldValues,
    settings: &ExportSettings,
) -> ExportDocument {
    let letterhead = Letterhead::from_values(values);
    let footer = letterhead.footer();

    let mut blocks: Vec<ExportBlock> = body_paragraphs(body)
        .into_iter()
        .map(|(role, text)| ExportBlock::Text {
            role,
            text: text.to_string(),
        })
        .collect();
    blocks.push(ExportBlock::Signature {
        area: SignatureArea::new(body, values),
    });

    let header_lines = letterhead.lines().len();
    let pages = paginate(blocks, header_lines + usize::from(header_lines > 0), settings);
    log::debug!("export of {:?}: {} page(s)", body.title, pages.len());

    ExportDocument {
        title: body.title.clone(),
        letterhead,
        pages,
        footer,
    }
}

/// Visible text of an export, footer counted once
pub fn export_text(doc: &ExportDocument) -> String {
    let mut lines = doc.letterhead.lines();
    for page in &doc.pages {
        for block in &page.blocks {
            match block {
                ExportBlock::Text { text, .. } => lines.push(text.clone()),
                ExportBlock::Signature { area } => {
                    lines.extend(area.lines().into_iter().map(str::to_string))
                }
            }
        }
    }
    lines.extend(doc.footer.clone());
    join_lines(lines.iter().map(String::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(clauses: usize) -> DocumentBody {
        DocumentBody {
            title: "Attestation sur l'honneur".to_string(),
            intro: "Je soussignée,".to_string(),
            subject_line: "Mme Claire Dupont".to_string(),
            body_clauses: (0..clauses).map(|i| format!("Clause numéro {}", i)).collect(),
            signature_label: "La déclarante".to_string(),
            signatory_name: "Claire Dupont".to_string(),
            closing: "Fait à Lyon, le 05/03/2024".to_string(),
        }
    }

    fn settings(lines_per_page: usize) -> ExportSettings {
        ExportSettings {
            lines_per_page,
            ..ExportSettings::default()
        }
    }

    #[test]
    fn test_short_document_single_page() {
        let doc = render_exportable(&body(2), &FieldValues::new(), &ExportSettings::default());
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.signature_page(), Some(1));
    }

    #[test]
    fn test_long_document_paginates() {
        let doc = render_exportable(&body(40), &FieldValues::new(), &settings(20));
        assert!(doc.page_count() > 1);
        let numbers: Vec<_> = doc.pages.iter().map(|p| p.number).collect();
        let expected: Vec<_> = (1..=doc.page_count()).collect();
        assert_eq!(numbers, expected);
    }

    #[test]
    fn test_signature_moves_whole_to_next_page() {
        // title, intro, subject, 9 clauses, closing: 13 blocks of 2 lines
        let doc = render_exportable(&body(9), &FieldValues::new(), &settings(30));
        let last = doc.pages.last().unwrap();
        assert_eq!(doc.page_count(), 2);
        assert!(matches!(last.blocks[0], ExportBlock::Signature { .. }));
    }

    #[test]
    fn test_page_numbers_not_in_text() {
        let doc = render_exportable(&body(40), &FieldValues::new(), &settings(20));
        let text = export_text(&doc);
        assert!(!text.contains("Page "));
        assert_eq!(text.matches("Clause numéro 39").count(), 1);
    }
}
