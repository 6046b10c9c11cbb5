//! Domain entities - Notebook sections and generated records

mod record;
mod region;
mod section;
mod subculture;

pub use record::{Record, RecordField};
pub use region::Region;
pub use section::{SectionField, SectionKind, SectionRef, SectionValues, Sections};
pub use subculture::Subculture;
