//! Typst to PDF compiler
//!
//! Compiles Typst markup to PDF bytes using typst-as-lib.

use std::path::Path;

use crate::error::{PdfError, Result};
use typst_as_lib::TypstEngine;

/// Compiler for converting Typst markup to PDF
pub struct Compiler;

impl Compiler {
    /// Compile Typst markup to PDF bytes
    pub fn compile(markup: &str) -> Result<Vec<u8>> {
        Self::compile_with_fonts::<&str>(markup, &[])
    }

    /// Compile with custom fonts
    ///
    /// Each path is either a font file or a directory whose `.ttf`, `.otf`
    /// and `.ttc` files are all loaded.
    pub fn compile_with_fonts<P: AsRef<Path>>(markup: &str, font_paths: &[P]) -> Result<Vec<u8>> {
        let fonts = load_fonts(font_paths)?;
        log::debug!("compiling {} bytes of Typst with {} font(s)", markup.len(), fonts.len());

        let engine = TypstEngine::builder()
            .main_file(markup.to_string())
            .fonts(fonts)
            .build();

        // compiled is Warned<Result<Document, Error>>
        let compiled = engine.compile();
        let document = compiled
            .output
            .map_err(|e| PdfError::Compilation(format!("{:?}", e)))?;

        let options = typst_pdf::PdfOptions::default();
        let pdf_bytes = typst_pdf::pdf(&document, &options)
            .map_err(|e| PdfError::Compilation(format!("PDF generation failed: {:?}", e)))?;

        Ok(pdf_bytes.into())
    }
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e.to_ascii_lowercase().as_str(), "ttf" | "otf" | "ttc"))
        .unwrap_or(false)
}

fn read_font(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| PdfError::Font(format!("Failed to read font {}: {}", path.display(), e)))
}

fn load_fonts<P: AsRef<Path>>(font_paths: &[P]) -> Result<Vec<Vec<u8>>> {
    let mut fonts = Vec::new();
    for font_path in font_paths {
        let path = font_path.as_ref();
        if path.is_dir() {
            let mut entries: Vec<_> = std::fs::read_dir(path)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| is_font_file(p))
                .collect();
            entries.sort();
            if entries.is_empty() {
                log::warn!("no font files in {}", path.display());
            }
            for entry in entries {
                fonts.push(read_font(&entry)?);
            }
        } else {
            fonts.push(read_font(path)?);
        }
    }
    Ok(fonts)
}
