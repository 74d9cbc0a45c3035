use super::error::CatalogError;
use super::query::PlantQuery;
use super::types::{CreatePlantRequest, ListParams, Plant, PlantPage};
use super::validation::validate_new_plant;
use crate::storage::PlantStore;

use std::cmp::Ordering;
use std::sync::Arc;

const LIST_FAILED: &str = "Failed to fetch plants";
const CATEGORIES_FAILED: &str = "Failed to fetch categories";
const CREATE_FAILED: &str = "Failed to create plant";

/// Catalog operations on top of a `PlantStore`.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn PlantStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn PlantStore>) -> Self {
        Self { store }
    }

    /// One page of matching plants plus the total match count.
    ///
    /// The page and the count are two independent reads against the same
    /// filter, so a concurrent insert may show up in one but not the other.
    pub async fn list(&self, params: &ListParams) -> Result<PlantPage, CatalogError> {
        let query = PlantQuery::from_params(params);
        let window = query.window();

        let (items, total) = tokio::try_join!(
            self.store.find(&query.filter, window),
            self.store.count(&query.filter),
        )
        .map_err(|e| CatalogError::storage(LIST_FAILED, e))?;

        tracing::debug!(
            "List page={} limit={} returned {} of {} plants",
            query.page,
            query.limit,
            items.len(),
            total
        );

        Ok(PlantPage {
            items,
            total,
            page: query.page,
            limit: query.limit,
        })
    }

    pub async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        let mut categories = self
            .store
            .distinct_categories()
            .await
            .map_err(|e| CatalogError::storage(CATEGORIES_FAILED, e))?;
        sort_categories(&mut categories);
        Ok(categories)
    }

    pub async fn create(&self, req: CreatePlantRequest) -> Result<Plant, CatalogError> {
        let new_plant = validate_new_plant(req)?;

        let plant = self
            .store
            .insert(new_plant)
            .await
            .map_err(|e| CatalogError::storage(CREATE_FAILED, e))?;

        tracing::info!("Created plant {} ({})", plant.id, plant.name);
        Ok(plant)
    }
}

/// Sorts labels in dictionary order: case-insensitive first, with the
/// lowercase spelling ahead of the uppercase one when they differ only in
/// case.
pub fn sort_categories(categories: &mut [String]) {
    categories.sort_by(|a, b| compare_labels(a, b));
}

pub fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
