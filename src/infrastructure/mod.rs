//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - HTTP: REST API routes
//! - Export: full notebook snapshot
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod export;
pub mod http;
pub mod state;
