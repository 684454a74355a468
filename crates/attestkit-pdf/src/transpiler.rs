//! Export layout to Typst markup transpiler
//!
//! Every piece of document text is emitted as a Typst string literal, so
//! user input never reaches the markup parser.

use attestkit_render::{ExportBlock, ExportDocument, Letterhead, SignatureArea, TextRole};

/// Transpiler for converting an exported document to Typst markup
pub struct Transpiler;

impl Transpiler {
    /// Transpile a document to Typst markup
    pub fn transpile(doc: &ExportDocument) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "#set document(title: \"{}\")\n",
            escape_string(&doc.title)
        ));
        output.push_str(&Self::page_setup(doc.footer.as_deref()));
        output.push_str("#set text(lang: \"fr\", size: 11pt)\n");
        output.push_str("#set par(justify: true)\n\n");

        output.push_str(&Self::transpile_letterhead(&doc.letterhead));

        for (i, page) in doc.pages.iter().enumerate() {
            if i > 0 {
                output.push_str("#pagebreak()\n\n");
            }
            for block in &page.blocks {
                output.push_str(&Self::transpile_block(block));
                output.push('\n');
            }
        }

        output
    }

    fn page_setup(footer: Option<&str>) -> String {
        match footer {
            Some(text) => format!(
                "#set page(paper: \"a4\", margin: 2cm, footer: align(center, text(size: 8pt, fill: luma(90), \"{}\")))\n",
                escape_string(text)
            ),
            None => "#set page(paper: \"a4\", margin: 2cm)\n".to_string(),
        }
    }

    fn transpile_letterhead(letterhead: &Letterhead) -> String {
        let lines = letterhead.lines();
        let Some((first, rest)) = lines.split_first() else {
            return String::new();
        };

        let mut inner = format!("#strong(\"{}\")", escape_string(first));
        for line in rest {
            inner.push_str(&format!(" \\\n#\"{}\"", escape_string(line)));
        }
        format!("#block(below: 2em)[\n{}\n]\n\n", inner)
    }

    /// Transpile a single block
    fn transpile_block(block: &ExportBlock) -> String {
        match block {
            ExportBlock::Text { role, text } => {
                let text = escape_string(text);
                match role {
                    TextRole::Title => format!(
                        "#align(center, block(below: 2em, text(size: 14pt, weight: \"bold\", \"{}\")))\n",
                        text
                    ),
                    TextRole::Closing => format!("#v(1em)\n#par(\"{}\")\n", text),
                    TextRole::Intro | TextRole::Subject | TextRole::Clause => {
                        format!("#par(\"{}\")\n", text)
                    }
                }
            }
            ExportBlock::Signature { area } => Self::transpile_signature(area),
        }
    }

    fn transpile_signature(area: &SignatureArea) -> String {
        let frame = match &area.stamp {
            Some(stamp) => format!(
                "#rect(width: 100%, stroke: 0.5pt, inset: 6pt, text(size: 9pt, \"{}\"))",
                escape_string(stamp)
            ),
            None => "#rect(width: 100%, height: 4em, stroke: 0.5pt)".to_string(),
        };
        format!(
            "#v(1.5em)\n#align(right, block(width: 50%)[\n#\"{}\" \\\n#strong(\"{}\")\n{}\n])\n",
            escape_string(&area.label),
            escape_string(&area.signatory),
            frame
        )
    }
}

/// Escape a value for a Typst string literal
fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use attestkit_render::ExportPage;

    fn block(role: TextRole, text: &str) -> ExportBlock {
        ExportBlock::Text {
            role,
            text: text.to_string(),
        }
    }

    fn area(stamp: Option<&str>) -> SignatureArea {
        SignatureArea {
            label: "Le déclarant".to_string(),
            signatory: "Jean Martin".to_string(),
            stamp: stamp.map(str::to_string),
        }
    }

    fn doc(
        pages: Vec<Vec<ExportBlock>>,
        letterhead: Letterhead,
        footer: Option<&str>,
    ) -> ExportDocument {
        ExportDocument {
            title: "Attestation d'hébergement".to_string(),
            letterhead,
            pages: pages
                .into_iter()
                .enumerate()
                .map(|(i, blocks)| ExportPage {
                    number: i + 1,
                    blocks,
                })
                .collect(),
            footer: footer.map(str::to_string),
        }
    }

    #[test]
    fn test_transpile_title_and_paragraph() {
        let typst = Transpiler::transpile(&doc(
            vec![vec![
                block(TextRole::Title, "Attestation d'hébergement"),
                block(TextRole::Clause, "héberge à titre gratuit"),
            ]],
            Letterhead::Personal { lines: vec![] },
            None,
        ));
        assert!(typst.contains("#set document(title: \"Attestation d'hébergement\")"));
        assert!(typst.contains("weight: \"bold\", \"Attestation d'hébergement\""));
        assert!(typst.contains("#par(\"héberge à titre gratuit\")"));
        assert!(!typst.contains("#block(below: 2em)["));
    }

    #[test]
    fn test_markup_characters_stay_literal() {
        let typst = Transpiler::transpile(&doc(
            vec![vec![block(TextRole::Clause, "#import \"x\" *gras* $1")]],
            Letterhead::Personal { lines: vec![] },
            None,
        ));
        assert!(typst.contains("#par(\"#import \\\"x\\\" *gras* $1\")"));
    }

    #[test]
    fn test_pagebreak_between_pages() {
        let typst = Transpiler::transpile(&doc(
            vec![
                vec![block(TextRole::Clause, "un")],
                vec![ExportBlock::Signature { area: area(None) }],
            ],
            Letterhead::Personal { lines: vec![] },
            None,
        ));
        assert_eq!(typst.matches("#pagebreak()").count(), 1);
        assert!(typst.contains("height: 4em"));
    }

    #[test]
    fn test_stamp_replaces_box() {
        let typst = Transpiler::transpile(&doc(
            vec![vec![ExportBlock::Signature {
                area: area(Some("Signé électroniquement par Jean Martin le 05/03/2024 à 09:15")),
            }]],
            Letterhead::Personal { lines: vec![] },
            None,
        ));
        assert!(typst.contains("Signé électroniquement par Jean Martin"));
        assert!(!typst.contains("height: 4em"));
    }

    #[test]
    fn test_organization_letterhead_and_footer() {
        let letterhead = Letterhead::Organization {
            name: "Acme SAS".to_string(),
            address: vec!["3 quai Perrache".to_string()],
            siret: Some("73282932000074".to_string()),
        };
        let footer = letterhead.footer();
        let typst = Transpiler::transpile(&doc(vec![vec![]], letterhead, footer.as_deref()));
        assert!(typst.contains("#strong(\"Acme SAS\")"));
        assert!(typst.contains("#\"SIRET : 73282932000074\""));
        assert!(typst.contains("footer: align(center"));
        assert!(typst.contains("Acme SAS · 3 quai Perrache · SIRET 73282932000074"));
    }

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_string("hello"), "hello");
        assert_eq!(escape_string("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_string("a\\b"), "a\\\\b");
        assert_eq!(escape_string("Mathématiques\nPhysique"), "Mathématiques\\nPhysique");
    }
}
