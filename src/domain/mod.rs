//! Domain layer - Core notebook model with no external dependencies
//!
//! This layer contains:
//! - Entities: fixed sections, regions and subcultures
//! - Value Objects: ids, percentages and the generator vocabularies
//! - Aggregates: the world model store
//! - Domain Services: record generation and the summary projection

pub mod aggregates;
pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
