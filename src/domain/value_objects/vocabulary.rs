//! Fixed vocabularies that generated records draw their attributes from
//!
//! Every vocabulary is a closed enum. Records store the variant; the
//! human-readable label is what the notebook shows next to it.

use rand::Rng;
use serde::{Deserialize, Serialize};

macro_rules! define_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            /// Every member, in declaration order
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            /// Draw one member uniformly
            pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
                Self::ALL[rng.gen_range(0..Self::ALL.len())]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

define_vocabulary! {
    /// Prevailing climate of a region
    Climate {
        Temperate => "Temperate",
        Mediterranean => "Mediterranean",
        Mountain => "Mountain",
        Desert => "Desert",
        Tropical => "Tropical",
        Continental => "Continental",
    }
}

define_vocabulary! {
    /// Dominant terrain of a region
    Terrain {
        Plains => "Plains",
        Mountains => "Mountains",
        Hills => "Hills",
        Coasts => "Coasts",
        Forests => "Forests",
        Deserts => "Deserts",
        Swamps => "Swamps",
    }
}

define_vocabulary! {
    /// Natural resource a region is known for
    Resource {
        Iron => "Iron",
        Gold => "Gold",
        EnergyCrystals => "Energy crystals",
        Grain => "Grain",
        Timber => "Timber",
        Gemstones => "Gemstones",
        MagicCoal => "Magic coal",
    }
}

define_vocabulary! {
    /// Economic specialization of a region
    Specialization {
        Metallurgy => "Metallurgy",
        Agriculture => "Agriculture",
        Craftsmanship => "Craftsmanship",
        Trade => "Trade",
        MagicalResearch => "Magical research",
        Military => "Military",
    }
}

define_vocabulary! {
    /// Where a subculture descends from
    Origin {
        NomadicTribes => "Nomadic tribes",
        AncientConquerors => "Ancient conquerors",
        Merchants => "Merchants",
        Artisans => "Artisans",
        Scholars => "Scholars",
        Warriors => "Warriors",
    }
}

define_vocabulary! {
    Tradition {
        AncestorWorship => "Ancestor worship",
        SeasonalRituals => "Seasonal rituals",
        FireCeremonies => "Fire ceremonies",
        WarDances => "War dances",
        NarrativeArt => "Narrative art",
    }
}

define_vocabulary! {
    /// Language a subculture speaks day to day
    Language {
        LocalDialect => "Local dialect",
        AncientTongue => "Ancient tongue",
    }
}

define_vocabulary! {
    /// Main source of friction between a subculture and the empire
    Tension {
        AutonomyVsCentralControl => "Autonomy vs central control",
        TraditionVsModernity => "Tradition vs modernity",
        EconomicRivalries => "Economic rivalries",
        ReligiousConflicts => "Religious conflicts",
    }
}
