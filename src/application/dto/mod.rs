//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so the HTTP routes can shape the wire
//! format (labels instead of enum keys, camelCase) without touching the
//! domain model.

pub mod record;
pub mod section;

pub use record::*;
pub use section::*;
