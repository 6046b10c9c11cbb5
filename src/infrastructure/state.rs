//! Shared application state

use crate::application::services::WorldServiceImpl;
use crate::infrastructure::config::AppConfig;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    /// The one notebook served by this process
    pub world_service: WorldServiceImpl,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let world_service = WorldServiceImpl::new(config.rng_seed);
        Self {
            config,
            world_service,
        }
    }
}
