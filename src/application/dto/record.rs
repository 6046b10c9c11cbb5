use serde::{Deserialize, Serialize};

use crate::domain::entities::{Region, Subculture};

/// Edit of one field of a generated record
///
/// `field` is kept as a string: names other than `name`/`notes` are
/// accepted and ignored rather than rejected.
#[derive(Debug, Deserialize)]
pub struct UpdateRecordRequestDto {
    pub field: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegionResponseDto {
    pub id: u64,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub resources: Vec<String>,
    pub specialization: String,
    pub population: u32,
    pub loyalty: u8,
    pub notes: String,
}

impl From<Region> for RegionResponseDto {
    fn from(r: Region) -> Self {
        Self {
            id: r.id.as_raw(),
            name: r.name,
            climate: r.climate.to_string(),
            terrain: r.terrain.to_string(),
            resources: r.resources.iter().map(|res| res.to_string()).collect(),
            specialization: r.specialization.to_string(),
            population: r.population,
            loyalty: r.loyalty.value(),
            notes: r.notes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubcultureResponseDto {
    pub id: u64,
    pub name: String,
    pub origin: String,
    pub main_tradition: String,
    pub language: String,
    pub tension: String,
    pub integration: u8,
    pub notes: String,
}

impl From<Subculture> for SubcultureResponseDto {
    fn from(s: Subculture) -> Self {
        Self {
            id: s.id.as_raw(),
            name: s.name,
            origin: s.origin.to_string(),
            main_tradition: s.main_tradition.to_string(),
            language: s.language.to_string(),
            tension: s.tension.to_string(),
            integration: s.integration.value(),
            notes: s.notes,
        }
    }
}
