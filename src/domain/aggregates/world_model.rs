//! World Model - The root aggregate of one worldbuilding notebook
//!
//! Holds the fixed sections and the two generated collections. All
//! mutation goes through this type; it is plain synchronous data and
//! knows nothing about locking or transport.

use rand::Rng;

use super::RecordCollection;
use crate::domain::entities::{
    RecordField, Region, SectionField, SectionKind, SectionRef, Sections, Subculture,
};
use crate::domain::errors::WorldModelError;
use crate::domain::services::{generator, Summary};
use crate::domain::value_objects::{IdSequence, RegionId, SubcultureId};

#[derive(Debug, Clone, Default)]
pub struct WorldModel {
    sections: Sections,
    regions: RecordCollection<Region>,
    subcultures: RecordCollection<Subculture>,
    ids: IdSequence,
}

impl WorldModel {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Fixed sections
    // ========================================================================

    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    pub fn section(&self, kind: SectionKind) -> SectionRef<'_> {
        self.sections.get(kind)
    }

    pub fn set_field(&mut self, field: SectionField, value: impl Into<String>) {
        self.sections.set(field, value);
    }

    /// String-addressed form of [`set_field`](Self::set_field)
    ///
    /// Unknown sections or fields are rejected and nothing is written.
    pub fn set_field_by_name(
        &mut self,
        section: &str,
        field: &str,
        value: impl Into<String>,
    ) -> Result<SectionField, WorldModelError> {
        let address = SectionField::parse(section, field)?;
        self.set_field(address, value);
        Ok(address)
    }

    // ========================================================================
    // Regions
    // ========================================================================

    pub fn regions(&self) -> &RecordCollection<Region> {
        &self.regions
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id)
    }

    /// Roll a new region and append it
    ///
    /// The default name is numbered from the current size, so it can repeat
    /// a name already in use after a removal.
    pub fn generate_region<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Region {
        let id = RegionId::from_raw(self.ids.allocate());
        let region = generator::roll_region(rng, id, self.regions.len() + 1);
        self.regions.push(region)
    }

    pub fn update_region(&mut self, id: RegionId, field: RecordField, value: impl Into<String>) -> bool {
        self.regions.update_field(id, field, value)
    }

    pub fn remove_region(&mut self, id: RegionId) -> Option<Region> {
        self.regions.remove(id)
    }

    // ========================================================================
    // Subcultures
    // ========================================================================

    pub fn subcultures(&self) -> &RecordCollection<Subculture> {
        &self.subcultures
    }

    pub fn subculture(&self, id: SubcultureId) -> Option<&Subculture> {
        self.subcultures.get(id)
    }

    pub fn generate_subculture<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Subculture {
        let id = SubcultureId::from_raw(self.ids.allocate());
        let subculture = generator::roll_subculture(rng, id, self.subcultures.len() + 1);
        self.subcultures.push(subculture)
    }

    pub fn update_subculture(
        &mut self,
        id: SubcultureId,
        field: RecordField,
        value: impl Into<String>,
    ) -> bool {
        self.subcultures.update_field(id, field, value)
    }

    pub fn remove_subculture(&mut self, id: SubcultureId) -> Option<Subculture> {
        self.subcultures.remove(id)
    }

    // ========================================================================
    // Derived
    // ========================================================================

    pub fn summary(&self) -> Summary {
        Summary::project(self.regions.as_slice(), self.subcultures.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_generate_appends_one_per_call() {
        let mut model = WorldModel::new();
        let mut rng = rng();

        for n in 1..=25 {
            model.generate_region(&mut rng);
            assert_eq!(model.regions().len(), n);
        }
        for region in model.regions() {
            assert!((1..=100).contains(&region.loyalty.value()));
            assert!((500_000..=5_499_999).contains(&region.population));
        }
    }

    #[test]
    fn test_ids_are_unique_and_never_reused() {
        let mut model = WorldModel::new();
        let mut rng = rng();

        let first = model.generate_region(&mut rng).id;
        let second = model.generate_region(&mut rng).id;
        model.remove_region(second);
        let third = model.generate_region(&mut rng).id;
        let culture = model.generate_subculture(&mut rng).id;

        assert_ne!(first, second);
        assert!(third > second);
        assert!(culture.as_raw() > third.as_raw());
    }

    #[test]
    fn test_default_names_can_repeat_after_removal() {
        let mut model = WorldModel::new();
        let mut rng = rng();

        let first = model.generate_region(&mut rng).id;
        model.generate_region(&mut rng);
        model.remove_region(first);
        let name = model.generate_region(&mut rng).name.clone();

        assert_eq!(name, "Region 2");
        let count = model.regions().iter().filter(|r| r.name == "Region 2").count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut model = WorldModel::new();
        let mut rng = rng();
        let id = model.generate_region(&mut rng).id;
        model.generate_region(&mut rng);

        assert!(model.remove_region(id).is_some());
        let after_first: Vec<Region> = model.regions().iter().cloned().collect();
        assert!(model.remove_region(id).is_none());

        assert_eq!(model.regions().as_slice(), after_first.as_slice());
    }

    #[test]
    fn test_remove_middle_preserves_order() {
        let mut model = WorldModel::new();
        let mut rng = rng();
        let a = model.generate_region(&mut rng).clone();
        let b = model.generate_region(&mut rng).id;
        let c = model.generate_region(&mut rng).clone();

        model.remove_region(b);

        assert_eq!(model.regions().as_slice(), [a, c].as_slice());
    }

    #[test]
    fn test_update_notes_changes_only_notes() {
        let mut model = WorldModel::new();
        let mut rng = rng();
        let before = model.generate_region(&mut rng).clone();

        assert!(model.update_region(before.id, RecordField::Notes, "Iron mines in the north"));

        let after = model.region(before.id).unwrap();
        assert_eq!(after.notes, "Iron mines in the north");
        assert_eq!(
            Region {
                notes: before.notes.clone(),
                ..after.clone()
            },
            before
        );
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut model = WorldModel::new();
        let mut rng = rng();
        let before = model.generate_subculture(&mut rng).clone();

        let changed = model.update_subculture(
            SubcultureId::from_raw(999),
            RecordField::Name,
            "Ghosts",
        );

        assert!(!changed);
        assert_eq!(model.subcultures().as_slice(), [before].as_slice());
    }

    #[test]
    fn test_subculture_lifecycle_mirrors_regions() {
        let mut model = WorldModel::new();
        let mut rng = rng();
        let id = model.generate_subculture(&mut rng).id;
        model.generate_subculture(&mut rng);

        assert_eq!(model.subculture(id).unwrap().name, "Culture 1");
        assert!(model.update_subculture(id, RecordField::Name, "Salt-singers"));
        assert_eq!(model.subculture(id).unwrap().name, "Salt-singers");
        assert!(model.remove_subculture(id).is_some());
        assert!(model.subculture(id).is_none());
        assert_eq!(model.subcultures().len(), 1);
    }

    #[test]
    fn test_set_field_keeps_other_fields() {
        let mut model = WorldModel::new();
        let capital = SectionField::parse("empire", "capital").unwrap();
        model.set_field(capital, "Aurelia");

        model
            .set_field_by_name("empire", "name", "Roma Nova")
            .unwrap();

        assert_eq!(
            model.section(SectionKind::Empire).entries(),
            vec![
                ("name", "Roma Nova"),
                ("government", ""),
                ("capital", "Aurelia"),
                ("population", ""),
                ("notes", ""),
            ]
        );
    }

    #[test]
    fn test_set_field_by_name_rejects_unknown() {
        let mut model = WorldModel::new();

        assert!(model.set_field_by_name("empire", "motto", "x").is_err());
        assert!(model.set_field_by_name("atlantis", "name", "x").is_err());
        assert_eq!(model.sections(), &Sections::default());
    }

    #[test]
    fn test_summary_tracks_collections() {
        let mut model = WorldModel::new();
        let mut rng = rng();
        assert_eq!(model.summary(), Summary::default());

        model.generate_region(&mut rng);
        model.generate_subculture(&mut rng);
        model.generate_subculture(&mut rng);

        let summary = model.summary();
        assert_eq!(summary.region_count, 1);
        assert_eq!(summary.subculture_count, 2);
        assert_eq!(summary.avg_loyalty, model.regions().as_slice()[0].loyalty.value());
    }
}
