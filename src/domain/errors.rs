//! Domain errors

use crate::domain::entities::SectionKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldModelError {
    #[error("Unknown section: {0}")]
    UnknownSection(String),
    #[error("Section '{section}' has no field named '{field}'")]
    UnknownField { section: SectionKind, field: String },
    #[error("Percentage out of range 1..=100: {0}")]
    PercentageOutOfRange(u8),
}
