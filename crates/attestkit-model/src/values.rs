//! The field value record
//!
//! A flat, sparse mapping from catalog field to string value. Requiredness is
//! never encoded here; it depends on the active document type.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::civility::Civility;
use crate::field::FieldName;

/// Field values entered by the user
///
/// Blank values are never stored: setting a field to an empty or
/// whitespace-only string removes it, so "absent" has a single representation.
/// Deserialization goes through the same rule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FieldValues {
    values: BTreeMap<FieldName, String>,
}

impl FieldValues {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(field, value)` pairs
    pub fn from_pairs<I, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (FieldName, V)>,
        V: Into<String>,
    {
        let mut values = Self::new();
        for (name, value) in pairs {
            values.set(name, value);
        }
        values
    }

    /// Set a field; a blank value removes it
    pub fn set(&mut self, name: FieldName, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            self.values.remove(&name);
        } else {
            self.values.insert(name, value);
        }
    }

    /// Builder-style [`FieldValues::set`]
    pub fn with(mut self, name: FieldName, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Remove a field, returning its previous value
    pub fn remove(&mut self, name: FieldName) -> Option<String> {
        self.values.remove(&name)
    }

    /// Raw value, trimmed; `None` when absent
    pub fn get(&self, name: FieldName) -> Option<&str> {
        self.values
            .get(&name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Whether the field holds a non-blank value
    pub fn has(&self, name: FieldName) -> bool {
        self.get(name).is_some()
    }

    /// Parsed civility of the declarant
    pub fn civility(&self) -> Option<Civility> {
        self.get(FieldName::Civility).and_then(Civility::parse)
    }

    /// Check if the record holds no value at all
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of fields holding a value
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterate over present fields in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Copy of the record restricted to the given fields
    ///
    /// The original record is left untouched, so values of fields hidden for
    /// the current document type survive a type switch.
    pub fn restricted_to<'a, I>(&self, fields: I) -> FieldValues
    where
        I: IntoIterator<Item = &'a FieldName>,
    {
        let mut scoped = FieldValues::new();
        for name in fields {
            if let Some(value) = self.values.get(name) {
                scoped.values.insert(*name, value.clone());
            }
        }
        scoped
    }
}

impl<'de> Deserialize<'de> for FieldValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BTreeMap::<FieldName, String>::deserialize(deserializer).map(FieldValues::from_pairs)
    }
}

impl FromIterator<(FieldName, String)> for FieldValues {
    fn from_iter<T: IntoIterator<Item = (FieldName, String)>>(iter: T) -> Self {
        FieldValues::from_pairs(iter)
    }
}
