//! Live preview rendering
//!
//! Produces a node tree the browser form maps onto its own components.

use serde::Serialize;

use attestkit_model::{DocumentBody, FieldValues};

use crate::letterhead::Letterhead;
use crate::signature::SignatureArea;
use crate::text::join_lines;

/// Role of a text paragraph in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextRole {
    Title,
    Intro,
    Subject,
    Clause,
    Closing,
}

/// Node of the preview tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PreviewNode {
    Document { children: Vec<PreviewNode> },
    Letterhead { letterhead: Letterhead },
    Paragraph { role: TextRole, text: String },
    Signature { area: SignatureArea },
    Footer { text: String },
}

/// Body text as `(role, text)` pairs, in reading order
pub(crate) fn body_paragraphs(body: &DocumentBody) -> Vec<(TextRole, &str)> {
    let mut paragraphs = vec![
        (TextRole::Title, body.title.as_str()),
        (TextRole::Intro, body.intro.as_str()),
        (TextRole::Subject, body.subject_line.as_str()),
    ];
    paragraphs.extend(body.body_clauses.iter().map(|c| (TextRole::Clause, c.as_str())));
    paragraphs.push((TextRole::Closing, body.closing.as_str()));
    paragraphs
}

/// Render the preview tree
pub fn render_preview(body: &DocumentBody, values: &FieldValues) -> PreviewNode {
    let letterhead = Letterhead::from_values(values);
    let footer = letterhead.footer();

    let mut children = vec![PreviewNode::Letterhead { letterhead }];
    children.extend(
        body_paragraphs(body)
            .into_iter()
            .map(|(role, text)| PreviewNode::Paragraph {
                role,
                text: text.to_string(),
            }),
    );
    children.push(PreviewNode::Signature {
        area: SignatureArea::new(body, values),
    });
    if let Some(text) = footer {
        children.push(PreviewNode::Footer { text });
    }
    PreviewNode::Document { children }
}

fn collect_text(node: &PreviewNode, out: &mut Vec<String>) {
    match node {
        PreviewNode::Document { children } => {
            for child in children {
                collect_text(child, out);
            }
        }
        PreviewNode::Letterhead { letterhead } => out.extend(letterhead.lines()),
        PreviewNode::Paragraph { text, .. } => out.push(text.clone()),
        PreviewNode::Signature { area } => out.extend(area.lines().into_iter().map(str::to_string)),
        PreviewNode::Footer { text } => out.push(text.clone()),
    }
}

/// Visible text of a preview tree
pub fn preview_text(node: &PreviewNode) -> String {
    let mut lines = Vec::new();
    collect_text(node, &mut lines);
    join_lines(lines.iter().map(String::as_str))
}
