//! World export functionality
//!
//! Serializes the whole notebook to JSON for clients to consume.

mod world_snapshot;

pub use world_snapshot::WorldSnapshot;
