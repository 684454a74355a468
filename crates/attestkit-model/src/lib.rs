//! attestkit-model - Field catalog and document model
//!
//! This crate provides the data types shared by every attestkit crate: the
//! closed set of document types, the field catalog, the value record, the
//! per-type field specifications and the generated document body.

pub mod body;
pub mod civility;
pub mod document_type;
pub mod field;
pub mod spec;
pub mod values;

pub use body::DocumentBody;
pub use civility::{Agreement, Civility};
pub use document_type::{Category, DocumentTypeId, UnknownCategory, UnknownKey};
pub use field::{FieldKind, FieldName, UnknownField};
pub use spec::{FieldSection, FieldSpec};
pub use values::FieldValues;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
