//! Subculture entity - A generated cultural minority within the empire

use serde::{Deserialize, Serialize};

use super::record::{Record, RecordField};
use crate::domain::value_objects::{Language, Origin, Percentage, SubcultureId, Tension, Tradition};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subculture {
    pub id: SubcultureId,
    pub name: String,
    pub origin: Origin,
    pub main_tradition: Tradition,
    pub language: Language,
    pub tension: Tension,
    /// How well the subculture is integrated into imperial society
    pub integration: Percentage,
    pub notes: String,
}

impl Subculture {
    pub fn default_name(ordinal: usize) -> String {
        format!("Culture {}", ordinal)
    }
}

impl Record for Subculture {
    type Id = SubcultureId;

    fn id(&self) -> SubcultureId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_field(&mut self, field: RecordField, value: String) {
        match field {
            RecordField::Name => self.name = value,
            RecordField::Notes => self.notes = value,
        }
    }
}
