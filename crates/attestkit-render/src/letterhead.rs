//! Letterhead and footer shared by both renderings

use serde::Serialize;

use attestkit_model::{FieldName, FieldValues};

/// Header block at the top of the first page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Letterhead {
    /// Issued by a company: name, address and registration
    Organization {
        name: String,
        address: Vec<String>,
        siret: Option<String>,
    },
    /// Issued by a person: name, postal address and e-mail
    Personal { lines: Vec<String> },
}

fn joined(parts: &[Option<&str>]) -> Option<String> {
    let parts: Vec<&str> = parts.iter().flatten().copied().collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

impl Letterhead {
    /// Choose the letterhead from the (visibility-scoped) values
    ///
    /// Any company registration or address detail selects the organization
    /// letterhead.
    pub fn from_values(values: &FieldValues) -> Self {
        let is_organization = [
            FieldName::Siret,
            FieldName::EntrepriseAdresse,
            FieldName::EntrepriseVille,
        ]
        .into_iter()
        .any(|f| values.has(f));

        if is_organization {
            Letterhead::Organization {
                name: values
                    .get(FieldName::Entreprise)
                    .map(str::to_string)
                    .unwrap_or_else(|| FieldName::Entreprise.placeholder_token()),
                address: [FieldName::EntrepriseAdresse, FieldName::EntrepriseVille]
                    .into_iter()
                    .filter_map(|f| values.get(f).map(str::to_string))
                    .collect(),
                siret: values.get(FieldName::Siret).map(str::to_string),
            }
        } else {
            let lines = [
                joined(&[values.get(FieldName::Prenom), values.get(FieldName::Nom)]),
                values.get(FieldName::Adresse).map(str::to_string),
                joined(&[values.get(FieldName::CodePostal), values.get(FieldName::Ville)]),
                values.get(FieldName::Email).map(str::to_string),
            ]
            .into_iter()
            .flatten()
            .collect();
            Letterhead::Personal { lines }
        }
    }

    pub fn is_organization(&self) -> bool {
        matches!(self, Letterhead::Organization { .. })
    }

    /// Text lines of the header
    pub fn lines(&self) -> Vec<String> {
        match self {
            Letterhead::Organization {
                name,
                address,
                siret,
            } => {
                let mut lines = vec![name.clone()];
                lines.extend(address.iter().cloned());
                if let Some(siret) = siret {
                    lines.push(format!("SIRET : {}", siret));
                }
                lines
            }
            Letterhead::Personal { lines } => lines.clone(),
        }
    }

    /// Registration footer; only organizations have one
    pub fn footer(&self) -> Option<String> {
        match self {
            Letterhead::Organization {
                name,
                address,
                siret,
            } => {
                let mut parts = vec![name.clone()];
                if !address.is_empty() {
                    parts.push(address.join(", "));
                }
                if let Some(siret) = siret {
                    parts.push(format!("SIRET {}", siret));
                }
                Some(parts.join(" · "))
            }
            Letterhead::Personal { .. } => None,
        }
    }
}
