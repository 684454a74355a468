//! Render settings
//!
//! Loaded from TOML. Every section and key is optional:
//!
//! ```toml
//! [export]
//! extension = "pdf"
//! lines_per_page = 42
//! chars_per_line = 90
//!
//! [pdf]
//! font_paths = ["/usr/share/fonts/dejavu"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RenderSettings {
    /// Exportable layout
    pub export: ExportSettings,
    /// PDF encoding
    pub pdf: PdfSettings,
}

impl RenderSettings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Read and parse a settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loading render settings from {}", path.as_ref().display());
        Self::from_toml_str(&text)
    }
}

/// Fixed layout of the exportable rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// File extension of the exported document
    pub extension: String,
    /// Text lines available on one page
    pub lines_per_page: usize,
    /// Characters per text line, used to estimate block heights
    pub chars_per_line: usize,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            extension: "pdf".to_string(),
            lines_per_page: 42,
            chars_per_line: 90,
        }
    }
}

impl ExportSettings {
    pub(crate) fn lines_per_page(&self) -> usize {
        self.lines_per_page.max(1)
    }

    pub(crate) fn chars_per_line(&self) -> usize {
        self.chars_per_line.max(1)
    }
}

/// PDF encoding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PdfSettings {
    /// Directories or files to load fonts from
    pub font_paths: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_settings_use_defaults() {
        let settings = RenderSettings::from_toml_str("").unwrap();
        assert_eq!(settings, RenderSettings::default());
        assert_eq!(settings.export.extension, "pdf");
    }

    #[test]
    fn test_partial_section() {
        let settings = RenderSettings::from_toml_str("[export]\nlines_per_page = 30\n").unwrap();
        assert_eq!(settings.export.lines_per_page, 30);
        assert_eq!(settings.export.chars_per_line, 90);
        assert!(settings.pdf.font_paths.is_empty());
    }

    #[test]
    fn test_font_paths() {
        let settings =
            RenderSettings::from_toml_str("[pdf]\nfont_paths = [\"fonts\", \"/opt/fonts\"]\n")
                .unwrap();
        assert_eq!(settings.pdf.font_paths, vec!["fonts", "/opt/fonts"]);
    }

    #[test]
    fn test_invalid_toml() {
        let err = RenderSettings::from_toml_str("[export]\nlines_per_page = \"beaucoup\"")
            .unwrap_err();
        assert!(err.to_string().starts_with("Invalid render settings"));
    }

    #[test]
    fn test_zero_layout_is_clamped() {
        let export = ExportSettings {
            lines_per_page: 0,
            chars_per_line: 0,
            ..ExportSettings::default()
        };
        assert_eq!(export.lines_per_page(), 1);
        assert_eq!(export.chars_per_line(), 1);
    }
}
