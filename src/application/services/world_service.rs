//! World Service - Application service for the worldbuilding notebook
//!
//! This service owns the single in-memory [`WorldModel`] together with the
//! random source used to roll new records. Every call takes the lock once,
//! performs one mutation or read, and releases it, so each user action is
//! applied atomically before the next one is seen.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::domain::aggregates::WorldModel;
use crate::domain::entities::{
    Record, RecordField, Region, SectionKind, SectionValues, Subculture,
};
use crate::domain::errors::WorldModelError;
use crate::domain::services::Summary;
use crate::domain::value_objects::{RegionId, SubcultureId};

/// World service trait defining the application use cases
#[async_trait]
pub trait WorldService: Send + Sync {
    /// Current values of one fixed section, in display order
    async fn get_section(&self, kind: SectionKind) -> SectionValues;

    /// Set one section field addressed by name, returning that section
    async fn set_section_field(
        &self,
        section: &str,
        field: &str,
        value: String,
    ) -> Result<SectionValues, WorldModelError>;

    async fn list_regions(&self) -> Vec<Region>;

    async fn get_region(&self, id: RegionId) -> Option<Region>;

    /// Roll and append a new region
    async fn generate_region(&self) -> Region;

    /// Edit `name` or `notes`; anything else, or an unknown id, does nothing
    async fn update_region(&self, id: RegionId, field: &str, value: String) -> bool;

    async fn remove_region(&self, id: RegionId) -> bool;

    async fn list_subcultures(&self) -> Vec<Subculture>;

    async fn get_subculture(&self, id: SubcultureId) -> Option<Subculture>;

    /// Roll and append a new subculture
    async fn generate_subculture(&self) -> Subculture;

    /// Edit `name` or `notes`; anything else, or an unknown id, does nothing
    async fn update_subculture(&self, id: SubcultureId, field: &str, value: String) -> bool;

    async fn remove_subculture(&self, id: SubcultureId) -> bool;

    /// Counts and averages over both collections
    async fn summary(&self) -> Summary;

    /// A consistent copy of the whole model, for export
    async fn export_model(&self) -> WorldModel;
}

struct Notebook {
    model: WorldModel,
    rng: StdRng,
}

/// Default implementation of WorldService backed by process memory
pub struct WorldServiceImpl {
    notebook: RwLock<Notebook>,
}

impl WorldServiceImpl {
    /// Create an empty notebook; a seed makes generation reproducible
    pub fn new(rng_seed: Option<u64>) -> Self {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            notebook: RwLock::new(Notebook {
                model: WorldModel::new(),
                rng,
            }),
        }
    }
}

#[async_trait]
impl WorldService for WorldServiceImpl {
    #[instrument(skip(self))]
    async fn get_section(&self, kind: SectionKind) -> SectionValues {
        debug!(section = %kind, "Fetching section");
        SectionValues::from(self.notebook.read().await.model.section(kind))
    }

    #[instrument(skip(self, value))]
    async fn set_section_field(
        &self,
        section: &str,
        field: &str,
        value: String,
    ) -> Result<SectionValues, WorldModelError> {
        let mut notebook = self.notebook.write().await;
        let address = notebook.model.set_field_by_name(section, field, value)?;
        info!(section = %address.section(), field = address.key(), "Updated section field");
        Ok(SectionValues::from(notebook.model.section(address.section())))
    }

    #[instrument(skip(self))]
    async fn list_regions(&self) -> Vec<Region> {
        debug!("Listing regions");
        self.notebook.read().await.model.regions().as_slice().to_vec()
    }

    #[instrument(skip(self))]
    async fn get_region(&self, id: RegionId) -> Option<Region> {
        debug!(region_id = %id, "Fetching region");
        self.notebook.read().await.model.region(id).cloned()
    }

    #[instrument(skip(self))]
    async fn generate_region(&self) -> Region {
        let mut guard = self.notebook.write().await;
        let Notebook { model, rng } = &mut *guard;
        let region = model.generate_region(rng).clone();
        info!(
            region_id = %region.id,
            climate = %region.climate,
            loyalty = region.loyalty.value(),
            "Generated region: {}",
            region.name
        );
        region
    }

    #[instrument(skip(self, value), fields(region_id = %id))]
    async fn update_region(&self, id: RegionId, field: &str, value: String) -> bool {
        let Some(field) = RecordField::parse(field) else {
            debug!(field, "Ignoring edit of read-only or unknown region field");
            return false;
        };
        let mut notebook = self.notebook.write().await;
        let updated = notebook.model.update_region(id, field, value);
        if updated {
            info!(%field, "Updated region");
        } else {
            debug!("No region with that id");
        }
        updated
    }

    #[instrument(skip(self))]
    async fn remove_region(&self, id: RegionId) -> bool {
        match self.notebook.write().await.model.remove_region(id) {
            Some(region) => {
                info!(region_id = %id, "Removed region: {}", region.name());
                true
            }
            None => {
                debug!(region_id = %id, "No region to remove");
                false
            }
        }
    }

    #[instrument(skip(self))]
    async fn list_subcultures(&self) -> Vec<Subculture> {
        debug!("Listing subcultures");
        self.notebook.read().await.model.subcultures().as_slice().to_vec()
    }

    #[instrument(skip(self))]
    async fn get_subculture(&self, id: SubcultureId) -> Option<Subculture> {
        debug!(subculture_id = %id, "Fetching subculture");
        self.notebook.read().await.model.subculture(id).cloned()
    }

    #[instrument(skip(self))]
    async fn generate_subculture(&self) -> Subculture {
        let mut guard = self.notebook.write().await;
        let Notebook { model, rng } = &mut *guard;
        let subculture = model.generate_subculture(rng).clone();
        info!(
            subculture_id = %subculture.id,
            origin = %subculture.origin,
            integration = subculture.integration.value(),
            "Generated subculture: {}",
            subculture.name
        );
        subculture
    }

    #[instrument(skip(self, value), fields(subculture_id = %id))]
    async fn update_subculture(&self, id: SubcultureId, field: &str, value: String) -> bool {
        let Some(field) = RecordField::parse(field) else {
            debug!(field, "Ignoring edit of read-only or unknown subculture field");
            return false;
        };
        let mut notebook = self.notebook.write().await;
        let updated = notebook.model.update_subculture(id, field, value);
        if updated {
            info!(%field, "Updated subculture");
        } else {
            debug!("No subculture with that id");
        }
        updated
    }

    #[instrument(skip(self))]
    async fn remove_subculture(&self, id: SubcultureId) -> bool {
        match self.notebook.write().await.model.remove_subculture(id) {
            Some(subculture) => {
                info!(subculture_id = %id, "Removed subculture: {}", subculture.name());
                true
            }
            None => {
                debug!(subculture_id = %id, "No subculture to remove");
                false
            }
        }
    }

    #[instrument(skip(self))]
    async fn summary(&self) -> Summary {
        self.notebook.read().await.model.summary()
    }

    #[instrument(skip(self))]
    async fn export_model(&self) -> WorldModel {
        debug!("Exporting world model");
        self.notebook.read().await.model.clone()
    }
}
