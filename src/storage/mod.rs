//! Plant Storage Module
//!
//! The persistence seam of the catalog.
//!
//! ## Core Concepts
//! - **`PlantStore`**: the operations the catalog needs from any backend:
//!   filtered paginated reads, counts, distinct categories, and inserts.
//! - **Filtering**: `PlantFilter` is evaluated by the backend; the catalog
//!   never filters in the HTTP layer.
//! - **Ordering**: reads are always newest first.
//!
//! `MemoryPlantStore` is the bundled backend. It keeps everything in a
//! concurrent map and relies on it for all synchronization.

pub mod filter;
pub mod memory;


use crate::catalog::types::{NewPlant, Plant};
use anyhow::Result;
use async_trait::async_trait;

pub use filter::{PageWindow, PlantFilter};
pub use memory::MemoryPlantStore;

#[async_trait]
pub trait PlantStore: Send + Sync {
    /// Plants matching `filter`, newest first, restricted to `window`.
    async fn find(&self, filter: &PlantFilter, window: PageWindow) -> Result<Vec<Plant>>;

    /// Number of plants matching `filter`, ignoring pagination.
    async fn count(&self, filter: &PlantFilter) -> Result<u64>;

    /// Every category label used by at least one plant, deduplicated, in no
    /// particular order.
    async fn distinct_categories(&self) -> Result<Vec<String>>;

    /// Persists a plant, assigning its identifier and timestamps.
    async fn insert(&self, plant: NewPlant) -> Result<Plant>;

    /// Removes every plant.
    async fn clear(&self) -> Result<()>;
}
