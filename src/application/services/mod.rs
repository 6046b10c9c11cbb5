//! Application services - Use case implementations
//!
//! The notebook has a single service. It owns the world model and the
//! random source and is shared by every HTTP handler.

pub mod world_service;

pub use world_service::{WorldService, WorldServiceImpl};
