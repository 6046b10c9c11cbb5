//! Record generator - Rolls new regions and subcultures
//!
//! Every randomized attribute is an independent uniform draw from its
//! vocabulary. The caller supplies the id and the 1-based ordinal used for
//! the default name; the generator never looks at existing records.

use rand::Rng;

use crate::domain::entities::{Region, Subculture};
use crate::domain::value_objects::{
    Climate, Language, Origin, Percentage, RegionId, Resource, Specialization, SubcultureId,
    Tension, Terrain, Tradition,
};

pub fn roll_region<R: Rng + ?Sized>(rng: &mut R, id: RegionId, ordinal: usize) -> Region {
    Region {
        id,
        name: Region::default_name(ordinal),
        climate: Climate::random(rng),
        terrain: Terrain::random(rng),
        resources: [Resource::random(rng), Resource::random(rng)],
        specialization: Specialization::random(rng),
        population: rng.gen_range(Region::MIN_POPULATION..Region::MAX_POPULATION),
        loyalty: Percentage::random(rng),
        notes: String::new(),
    }
}

pub fn roll_subculture<R: Rng + ?Sized>(rng: &mut R, id: SubcultureId, ordinal: usize) -> Subculture {
    Subculture {
        id,
        name: Subculture::default_name(ordinal),
        origin: Origin::random(rng),
        main_tradition: Tradition::random(rng),
        language: Language::random(rng),
        tension: Tension::random(rng),
        integration: Percentage::random(rng),
        notes: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_region_attributes_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for n in 1..=500 {
            let region = roll_region(&mut rng, RegionId::from_raw(n as u64), n);
            assert!(region.population >= 500_000);
            assert!(region.population <= 5_499_999);
            assert!((1..=100).contains(&region.loyalty.value()));
            assert!(region.notes.is_empty());
        }
    }

    #[test]
    fn test_region_default_name_uses_ordinal() {
        let mut rng = StdRng::seed_from_u64(2);
        let region = roll_region(&mut rng, RegionId::from_raw(9), 3);
        assert_eq!(region.name, "Region 3");
        assert_eq!(region.id, RegionId::from_raw(9));
    }

    #[test]
    fn test_resources_may_repeat() {
        let mut rng = StdRng::seed_from_u64(3);
        let repeated = (1..=500)
            .map(|n| roll_region(&mut rng, RegionId::from_raw(n), 1))
            .any(|r| r.resources[0] == r.resources[1]);
        assert!(repeated);
    }

    #[test]
    fn test_subculture_attributes() {
        let mut rng = StdRng::seed_from_u64(4);
        let cultures: Vec<Subculture> = (1..=200)
            .map(|n| roll_subculture(&mut rng, SubcultureId::from_raw(n), n as usize))
            .collect();

        assert_eq!(cultures[0].name, "Culture 1");
        assert!(cultures.iter().all(|c| (1..=100).contains(&c.integration.value())));
        assert!(cultures.iter().any(|c| c.language == Language::LocalDialect));
        assert!(cultures.iter().any(|c| c.language == Language::AncientTongue));
    }
}
