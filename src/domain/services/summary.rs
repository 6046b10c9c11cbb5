//! Summary projection - Counts and averages shown in the recap panel

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Region, Subculture};
use crate::domain::value_objects::Percentage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub region_count: usize,
    pub subculture_count: usize,
    /// Mean region loyalty, rounded; 0 with no regions
    pub avg_loyalty: u8,
    /// Mean subculture integration, rounded; 0 with no subcultures
    pub avg_integration: u8,
}

impl Summary {
    pub fn project(regions: &[Region], subcultures: &[Subculture]) -> Self {
        Self {
            region_count: regions.len(),
            subculture_count: subcultures.len(),
            avg_loyalty: rounded_mean(regions.iter().map(|r| r.loyalty)),
            avg_integration: rounded_mean(subcultures.iter().map(|s| s.integration)),
        }
    }
}

/// Arithmetic mean rounded to nearest, halves up
fn rounded_mean(values: impl Iterator<Item = Percentage>) -> u8 {
    let (sum, count) = values.fold((0u64, 0u64), |(sum, count), p| {
        (sum + u64::from(p.value()), count + 1)
    });
    if count == 0 {
        return 0;
    }
    // mean of values in 1..=100 cannot exceed 100
    ((2 * sum + count) / (2 * count)) as u8
}
