//! Application layer - Use cases over the domain model
//!
//! This layer contains:
//! - Services: the notebook use cases behind a lock
//! - DTOs: request and response shapes for the HTTP boundary

pub mod dto;
pub mod services;
