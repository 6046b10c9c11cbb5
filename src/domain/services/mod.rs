//! Domain services - Pure operations over the notebook model

pub mod generator;
mod summary;

pub use summary::Summary;
