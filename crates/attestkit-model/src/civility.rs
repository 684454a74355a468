//! Civility (salutation) and the grammatical agreement it drives

use serde::{Deserialize, Serialize};

/// Salutation of a person named in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Civility {
    Monsieur,
    Madame,
}

impl Civility {
    /// Form option values, as stored in the value record
    pub const OPTIONS: [&'static str; 2] = ["Monsieur", "Madame"];

    /// Parse a stored value; accepts the long form and the abbreviation
    ///
    /// Anything else (including an empty string) yields `None`, which the
    /// generator renders with gender-neutral agreement.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "monsieur" | "m." | "m" | "mr" => Some(Civility::Monsieur),
            "madame" | "mme" | "mme." | "mrs" => Some(Civility::Madame),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Civility::Monsieur => "Monsieur",
            Civility::Madame => "Madame",
        }
    }
}

/// French agreement helper for an optionally known civility
///
/// `None` produces the inclusive written forms (`né(e)`, `M./Mme`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Agreement(pub Option<Civility>);

impl Agreement {
    /// Feminine suffix: `""`, `"e"` or `"(e)"`
    pub fn e(self) -> &'static str {
        match self.0 {
            Some(Civility::Monsieur) => "",
            Some(Civility::Madame) => "e",
            None => "(e)",
        }
    }

    /// Abbreviated title placed before a name
    pub fn title(self) -> &'static str {
        match self.0 {
            Some(Civility::Monsieur) => "M.",
            Some(Civility::Madame) => "Mme",
            None => "M./Mme",
        }
    }

    /// Subject pronoun, capitalized
    pub fn pronoun(self) -> &'static str {
        match self.0 {
            Some(Civility::Monsieur) => "Il",
            Some(Civility::Madame) => "Elle",
            None => "Il/Elle",
        }
    }

    /// Pick between a masculine and a feminine word
    pub fn choose(self, masculine: &'static str, feminine: &'static str) -> String {
        match self.0 {
            Some(Civility::Monsieur) => masculine.to_string(),
            Some(Civility::Madame) => feminine.to_string(),
            None => format!("{}/{}", masculine, feminine),
        }
    }
}

impl From<Option<Civility>> for Agreement {
    fn from(civility: Option<Civility>) -> Self {
        Agreement(civility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        assert_eq!(Civility::parse("Madame"), Some(Civility::Madame));
        assert_eq!(Civility::parse(" mme "), Some(Civility::Madame));
        assert_eq!(Civility::parse("M."), Some(Civility::Monsieur));
        assert_eq!(Civility::parse(""), None);
        assert_eq!(Civility::parse("Docteur"), None);
    }

    #[test]
    fn test_agreement_forms() {
        let madame = Agreement(Some(Civility::Madame));
        assert_eq!(format!("né{}", madame.e()), "née");
        assert_eq!(madame.title(), "Mme");

        let unknown = Agreement::default();
        assert_eq!(format!("né{}", unknown.e()), "né(e)");
        assert_eq!(unknown.title(), "M./Mme");
        assert_eq!(unknown.choose("le garant", "la garante"), "le garant/la garante");
    }
}
