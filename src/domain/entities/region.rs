//! Region entity - A generated province of the empire

use serde::{Deserialize, Serialize};

use super::record::{Record, RecordField};
use crate::domain::value_objects::{
    Climate, Percentage, RegionId, Resource, Specialization, Terrain,
};

/// A region of the empire
///
/// Everything except `name` and `notes` is rolled once by the generator
/// and stays fixed for the life of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: RegionId,
    pub name: String,
    pub climate: Climate,
    pub terrain: Terrain,
    /// Two independent draws, the same resource may appear twice
    pub resources: [Resource; 2],
    pub specialization: Specialization,
    pub population: u32,
    pub loyalty: Percentage,
    pub notes: String,
}

impl Region {
    /// Lowest population a generated region can have
    pub const MIN_POPULATION: u32 = 500_000;
    /// Exclusive upper bound on generated population
    pub const MAX_POPULATION: u32 = 5_500_000;

    /// Default name for the `ordinal`-th region (1-based)
    pub fn default_name(ordinal: usize) -> String {
        format!("Region {}", ordinal)
    }
}

impl Record for Region {
    type Id = RegionId;

    fn id(&self) -> RegionId {
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
