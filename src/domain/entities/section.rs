//! Fixed sections - The structured free-text notes of the notebook
//!
//! Each section is a plain struct with one `String` per field. The set of
//! fields is fixed at compile time; the string-addressed API used by the
//! HTTP boundary is generated from the same declaration so the two can
//! never drift apart.

use serde::{Deserialize, Serialize};

use crate::domain::errors::WorldModelError;

/// Which fixed section a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Empire,
    HiddenIsland,
    MagicSystem,
    Conflict,
    Timeline,
}

impl SectionKind {
    pub const ALL: &'static [SectionKind] = &[
        SectionKind::Empire,
        SectionKind::HiddenIsland,
        SectionKind::MagicSystem,
        SectionKind::Conflict,
        SectionKind::Timeline,
    ];

    /// Key used on the wire and in routes
    pub fn key(self) -> &'static str {
        match self {
            SectionKind::Empire => "empire",
            SectionKind::HiddenIsland => "hiddenIsland",
            SectionKind::MagicSystem => "magicSystem",
            SectionKind::Conflict => "conflict",
            SectionKind::Timeline => "timeline",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Empire => "Roman-Industrial Empire",
            SectionKind::HiddenIsland => "Hjarta - The Hidden Island",
            SectionKind::MagicSystem => "Thermodynamic Magic System",
            SectionKind::Conflict => "Colonial Conflict",
            SectionKind::Timeline => "Timeline & Relations",
        }
    }

    /// Field keys and hints of this section, in display order
    pub fn fields(self) -> Vec<(&'static str, &'static str)> {
        fn pairs<F: Copy>(all: &[F], key: fn(F) -> &'static str, hint: fn(F) -> &'static str) -> Vec<(&'static str, &'static str)> {
            all.iter().map(|f| (key(*f), hint(*f))).collect()
        }

        match self {
            SectionKind::Empire => pairs(EmpireField::ALL, EmpireField::key, EmpireField::hint),
            SectionKind::HiddenIsland => {
                pairs(HiddenIslandField::ALL, HiddenIslandField::key, HiddenIslandField::hint)
            }
            SectionKind::MagicSystem => {
                pairs(MagicSystemField::ALL, MagicSystemField::key, MagicSystemField::hint)
            }
            SectionKind::Conflict => pairs(ConflictField::ALL, ConflictField::key, ConflictField::hint),
            SectionKind::Timeline => pairs(TimelineField::ALL, TimelineField::key, TimelineField::hint),
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for SectionKind {
    type Err = WorldModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| WorldModelError::UnknownSection(s.to_string()))
    }
}

macro_rules! define_section {
    (
        $(#[$meta:meta])*
        $name:ident, $field_enum:ident, $kind:expr, {
            $( $field:ident / $variant:ident => $key:literal, $hint:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $( pub $field: String, )+
        }

        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $field_enum {
            $( #[serde(rename = $key)] $variant, )+
        }

        impl $field_enum {
            pub const ALL: &'static [$field_enum] = &[ $( $field_enum::$variant, )+ ];

            pub fn key(self) -> &'static str {
                match self {
                    $( $field_enum::$variant => $key, )+
                }
            }

            pub fn hint(self) -> &'static str {
                match self {
                    $( $field_enum::$variant => $hint, )+
                }
            }
        }

        impl std::fmt::Display for $field_enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.key())
            }
        }

        impl std::str::FromStr for $field_enum {
            type Err = WorldModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $key => Ok($field_enum::$variant), )+
                    _ => Err(WorldModelError::UnknownField {
                        section: $kind,
                        field: s.to_string(),
                    }),
                }
            }
        }

        impl $name {
            pub fn get(&self, field: $field_enum) -> &str {
                match field {
                    $( $field_enum::$variant => &self.$field, )+
                }
            }

            pub fn set(&mut self, field: $field_enum, value: impl Into<String>) {
                let slot = match field {
                    $( $field_enum::$variant => &mut self.$field, )+
                };
                *slot = value.into();
            }

            /// `(key, value)` pairs in display order
            pub fn entries(&self) -> Vec<(&'static str, &str)> {
                $field_enum::ALL.iter().map(|f| (f.key(), self.get(*f))).collect()
            }
        }
    };
}

define_section! {
    /// The Roman-industrial empire at the centre of the setting
    EmpireSection, EmpireField, SectionKind::Empire, {
        name / Name => "name", "Name of the empire";
        government / Government => "government", "System of government";
        capital / Capital => "capital", "Capital city";
        population / Population => "population", "Total population";
        notes / Notes => "notes", "General notes on the empire (social structure, economy, technologies...)";
    }
}

define_section! {
    /// Hjarta, the hidden island and its matriarchal culture
    HiddenIslandSection, HiddenIslandField, SectionKind::HiddenIsland, {
        geography / Geography => "geography", "Geography of Hjarta (landscapes, climate, main cities...)";
        culture / Culture => "culture", "Matriarchal culture (social structure, traditions, values...)";
        crystal_magic / CrystalMagic => "crystalMagic", "Crystal magic (how it works, rituals, bond with the heart of the world...)";
        society / Society => "society", "Social organization (roles, hierarchies, daily life...)";
        notes / Notes => "notes", "General notes on Hjarta";
    }
}

define_section! {
    MagicSystemSection, MagicSystemField, SectionKind::MagicSystem, {
        thermodynamics / Thermodynamics => "thermodynamics", "Thermodynamic principles (conservation of energy, transformations, limits...)";
        batteries / Batteries => "batteries", "Magic batteries (how they are made, capacity, lifetime, efficiency...)";
        technologies / Technologies => "technologies", "Magic-powered technologies (transport, machinery, communications...)";
        imbalance / Imbalance => "imbalance", "Energy imbalance (causes, effects, consequences for the world...)";
        notes / Notes => "notes", "Additional notes on the magic system";
    }
}

define_section! {
    /// The colonization of Hjarta and the imbalance it causes
    ConflictSection, ConflictField, SectionKind::Conflict, {
        colonization / Colonization => "colonization", "Colonization process (how it happened, strategies, first reactions...)";
        energy_imbalance / EnergyImbalance => "energyImbalance", "Energy imbalance caused (mechanisms, progression, tipping points...)";
        consequences / Consequences => "consequences", "Consequences of the imbalance (effects on Hjarta, the empire, the world...)";
        resistance / Resistance => "resistance", "Resistance and reactions (rebel movements, alliances, counterattacks...)";
        notes / Notes => "notes", "Additional notes on the conflict";
    }
}

define_section! {
    TimelineSection, TimelineField, SectionKind::Timeline, {
        events / Events => "events", "Timeline of key events (discovery of Hjarta, first expeditions, start of colonization...)";
        inter_regional_relations / InterRegionalRelations => "interRegionalRelations", "Inter-regional relations (alliances, rivalries, trade routes, conflicts...)";
        colonization_impacts / ColonizationImpacts => "colonizationImpacts", "Uneven impacts of colonization (how each region reacts, economic gains and losses...)";
    }
}

/// A typed address of one field in one section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionField {
    Empire(EmpireField),
    HiddenIsland(HiddenIslandField),
    MagicSystem(MagicSystemField),
    Conflict(ConflictField),
    Timeline(TimelineField),
}

impl SectionField {
    /// Resolve a string address; fails if either part is not in the schema
    pub fn parse(section: &str, field: &str) -> Result<Self, WorldModelError> {
        let kind: SectionKind = section.parse()?;
        Ok(match kind {
            SectionKind::Empire => SectionField::Empire(field.parse()?),
            SectionKind::HiddenIsland => SectionField::HiddenIsland(field.parse()?),
            SectionKind::MagicSystem => SectionField::MagicSystem(field.parse()?),
            SectionKind::Conflict => SectionField::Conflict(field.parse()?),
            SectionKind::Timeline => SectionField::Timeline(field.parse()?),
        })
    }

    pub fn section(self) -> SectionKind {
        match self {
            SectionField::Empire(_) => SectionKind::Empire,
            SectionField::HiddenIsland(_) => SectionKind::HiddenIsland,
            SectionField::MagicSystem(_) => SectionKind::MagicSystem,
            SectionField::Conflict(_) => SectionKind::Conflict,
            SectionField::Timeline(_) => SectionKind::Timeline,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SectionField::Empire(f) => f.key(),
            SectionField::HiddenIsland(f) => f.key(),
            SectionField::MagicSystem(f) => f.key(),
            SectionField::Conflict(f) => f.key(),
            SectionField::Timeline(f) => f.key(),
        }
    }
}

/// All fixed sections of one notebook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sections {
    pub empire: EmpireSection,
    pub hidden_island: HiddenIslandSection,
    pub magic_system: MagicSystemSection,
    pub conflict: ConflictSection,
    pub timeline: TimelineSection,
}

impl Sections {
    pub fn get(&self, kind: SectionKind) -> SectionRef<'_> {
        match kind {
            SectionKind::Empire => SectionRef::Empire(&self.empire),
            SectionKind::HiddenIsland => SectionRef::HiddenIsland(&self.hidden_island),
            SectionKind::MagicSystem => SectionRef::MagicSystem(&self.magic_system),
            SectionKind::Conflict => SectionRef::Conflict(&self.conflict),
            SectionKind::Timeline => SectionRef::Timeline(&self.timeline),
        }
    }

    pub fn set(&mut self, field: SectionField, value: impl Into<String>) {
        match field {
            SectionField::Empire(f) => self.empire.set(f, value),
            SectionField::HiddenIsland(f) => self.hidden_island.set(f, value),
            SectionField::MagicSystem(f) => self.magic_system.set(f, value),
            SectionField::Conflict(f) => self.conflict.set(f, value),
            SectionField::Timeline(f) => self.timeline.set(f, value),
        }
    }
}

/// Borrowed view of one section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionRef<'a> {
    Empire(&'a EmpireSection),
    HiddenIsland(&'a HiddenIslandSection),
    MagicSystem(&'a MagicSystemSection),
    Conflict(&'a ConflictSection),
    Timeline(&'a TimelineSection),
}

impl<'a> SectionRef<'a> {
    pub fn entries(&self) -> Vec<(&'static str, &'a str)> {
        match *self {
            SectionRef::Empire(s) => s.entries(),
            SectionRef::HiddenIsland(s) => s.entries(),
            SectionRef::MagicSystem(s) => s.entries(),
            SectionRef::Conflict(s) => s.entries(),
            SectionRef::Timeline(s) => s.entries(),
        }
    }
}

/// Owned copy of one section, serialized as a `field -> value` object
/// with the fields in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionValues(Vec<(&'static str, String)>);

impl SectionValues {
    pub fn entries(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

impl<'a> From<SectionRef<'a>> for SectionValues {
    fn from(section: SectionRef<'a>) -> Self {
        Self(
            section
                .entries()
                .into_iter()
                .map(|(key, value)| (key, value.to_string()))
                .collect(),
        )
    }
}

impl Serialize for SectionValues {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
