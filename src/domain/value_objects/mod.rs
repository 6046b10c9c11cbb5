//! Value objects - Immutable objects defined by their attributes

mod ids;
mod percentage;
mod vocabulary;

pub use ids::*;
pub use percentage::Percentage;
pub use vocabulary::{
    Climate, Language, Origin, Resource, Specialization, Tension, Terrain, Tradition,
};
