//! Aggregates - Cluster of domain objects treated as a single unit

mod record_collection;
pub mod world_model;

pub use record_collection::RecordCollection;
pub use world_model::WorldModel;
