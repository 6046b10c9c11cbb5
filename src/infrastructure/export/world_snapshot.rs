//! Full notebook snapshot
//!
//! One JSON document with every section, both record collections and the
//! summary panel, stamped with the time it was taken. This is what a
//! client loads on start-up; nothing is ever written to disk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::dto::{RegionResponseDto, SubcultureResponseDto};
use crate::domain::aggregates::WorldModel;
use crate::domain::entities::Sections;
use crate::domain::services::Summary;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldSnapshot {
    pub exported_at: DateTime<Utc>,
    pub sections: Sections,
    pub regions: Vec<RegionResponseDto>,
    pub subcultures: Vec<SubcultureResponseDto>,
    pub summary: Summary,
}

impl WorldSnapshot {
    pub fn capture(model: &WorldModel) -> Self {
        Self {
            exported_at: Utc::now(),
            sections: model.sections().clone(),
            regions: model
                .regions()
                .iter()
                .cloned()
                .map(RegionResponseDto::from)
                .collect(),
            subcultures: model
                .subcultures()
                .iter()
                .cloned()
                .map(SubcultureResponseDto::from)
                .collect(),
            summary: model.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SectionField;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_capture_mirrors_model() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut model = WorldModel::new();
        model.set_field(SectionField::parse("empire", "name").unwrap(), "Roma Nova");
        let region_id = model.generate_region(&mut rng).id;
        model.generate_region(&mut rng);
        model.generate_subculture(&mut rng);

        let snapshot = WorldSnapshot::capture(&model);

        assert_eq!(snapshot.sections.empire.name, "Roma Nova");
        assert_eq!(snapshot.regions.len(), 2);
        assert_eq!(snapshot.regions[0].id, region_id.as_raw());
        assert_eq!(snapshot.subcultures.len(), 1);
        assert_eq!(snapshot.summary, model.summary());
    }

    #[test]
    fn test_json_layout() {
        let snapshot = WorldSnapshot::capture(&WorldModel::new());
        let json = serde_json::to_value(&snapshot).unwrap();

        assert!(json["exportedAt"].is_string());
        assert_eq!(json["sections"]["hiddenIsland"]["crystalMagic"], "");
        assert_eq!(json["sections"]["timeline"]["events"], "");
        assert_eq!(json["regions"], serde_json::json!([]));
        assert_eq!(json["summary"]["avgIntegration"], 0);
    }
}
