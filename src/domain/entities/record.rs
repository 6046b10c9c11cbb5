//! Behaviour shared by generated records

use serde::{Deserialize, Serialize};

/// The only fields of a generated record that can change after creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordField {
    Name,
    Notes,
}

impl RecordField {
    /// Parse a field name; anything other than `name`/`notes` yields `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(RecordField::Name),
            "notes" => Some(RecordField::Notes),
            _ => None,
        }
    }
}

impl std::fmt::Display for RecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordField::Name => write!(f, "name"),
            RecordField::Notes => write!(f, "notes"),
        }
    }
}

/// A generated, user-annotatable record kept in a [`RecordCollection`]
///
/// [`RecordCollection`]: crate::domain::aggregates::RecordCollection
pub trait Record {
    type Id: Copy + Eq + std::fmt::Display;

    fn id(&self) -> Self::Id;

    fn name(&self) -> &str;

    /// Replace one of the editable fields
    fn set_field(&mut self, field: RecordField, value: String);
}
