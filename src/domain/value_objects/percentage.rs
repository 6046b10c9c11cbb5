//! Percentage value object for loyalty and integration scores

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::errors::WorldModelError;

/// An integer percentage in `1..=100`
///
/// Zero is not a valid score: a freshly generated region or subculture
/// always keeps at least some loyalty or integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Result<Self, WorldModelError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(WorldModelError::PercentageOutOfRange(value))
        }
    }

    /// Draw a percentage uniformly from `1..=100`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(Self::MIN..=Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Percentage {
    type Error = WorldModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(p: Percentage) -> u8 {
        p.0
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bounds() {
        assert!(Percentage::new(0).is_err());
        assert!(Percentage::new(101).is_err());
        assert_eq!(Percentage::new(1).unwrap().value(), 1);
        assert_eq!(Percentage::new(100).unwrap().value(), 100);
    }

    #[test]
    fn test_random_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let p = Percentage::random(&mut rng).value();
            assert!((1..=100).contains(&p));
        }
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Percentage>("0").is_err());
        assert_eq!(serde_json::from_str::<Percentage>("55").unwrap().value(), 55);
        assert_eq!(Percentage::new(40).unwrap().to_string(), "40%");
    }
}
