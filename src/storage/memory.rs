use super::filter::{PageWindow, PlantFilter};
use super::PlantStore;
use crate::catalog::types::{NewPlant, Plant};

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// A stored plant together with its insertion sequence number.
///
/// Timestamps can collide when plants are created within the same instant,
/// so `seq` breaks ties to keep newest-first ordering deterministic.
#[derive(Debug, Clone)]
struct Entry {
    seq: u64,
    plant: Plant,
}

pub struct MemoryPlantStore {
    plants: Arc<DashMap<String, Entry>>,
    next_seq: AtomicU64,
}

impl MemoryPlantStore {
    pub fn new() -> Self {
        Self {
            plants: Arc::new(DashMap::new()),
            next_seq: AtomicU64::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<Plant> {
        self.plants.get(id).map(|entry| entry.plant.clone())
    }

    fn matching(&self, filter: &PlantFilter) -> Vec<Entry> {
        self.plants
            .iter()
            .filter(|entry| filter.matches(&entry.plant))
            .map(|entry| entry.value().clone())
            .collect()
    }
}

impl Default for MemoryPlantStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlantStore for MemoryPlantStore {
    async fn find(&self, filter: &PlantFilter, window: PageWindow) -> Result<Vec<Plant>> {
        let mut entries = self.matching(filter);
        entries.sort_by(|a, b| {
            b.plant
                .created_at
                .cmp(&a.plant.created_at)
                .then_with(|| b.seq.cmp(&a.seq))
        });

        let skip = usize::try_from(window.skip).unwrap_or(usize::MAX);
        let take = usize::try_from(window.take).unwrap_or(usize::MAX);

        Ok(entries
            .into_iter()
            .skip(skip)
            .take(take)
            .map(|entry| entry.plant)
            .collect())
    }

    async fn count(&self, filter: &PlantFilter) -> Result<u64> {
        if filter.is_empty() {
            return Ok(self.plants.len() as u64);
        }
        let count = self
            .plants
            .iter()
            .filter(|entry| filter.matches(&entry.plant))
            .count();
        Ok(count as u64)
    }

    async fn distinct_categories(&self) -> Result<Vec<String>> {
        let labels: BTreeSet<String> = self
            .plants
            .iter()
            .flat_map(|entry| entry.plant.categories.clone())
            .collect();
        Ok(labels.into_iter().collect())
    }

    async fn insert(&self, plant: NewPlant) -> Result<Plant> {
        let id = Uuid::new_v4().to_string();
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        let plant = plant.into_plant(id.clone(), Utc::now());

        self.plants.insert(
            id,
            Entry {
                seq,
                plant: plant.clone(),
            },
        );
        tracing::debug!("Stored plant {} ({})", plant.id, plant.name);

        Ok(plant)
    }

    async fn clear(&self) -> Result<()> {
        self.plants.clear();
        Ok(())
    }
}
