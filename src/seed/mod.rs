//! Sample Catalog
//!
//! A fixed set of plants used to populate an empty store for demos and
//! local development. Seeding replaces whatever the store holds.

use crate::catalog::types::NewPlant;
use crate::storage::PlantStore;
use anyhow::{Context, Result};


/// `(name, price, categories)`; every sample plant is in stock.
pub const SAMPLE_PLANTS: &[(&str, f64, &[&str])] = &[
    ("Money Plant (Pothos)", 199.0, &["Indoor", "Home Decor", "Low Maintenance"]),
    ("Snake Plant (Sansevieria)", 299.0, &["Indoor", "Air Purifying", "Low Maintenance"]),
    ("Areca Palm", 499.0, &["Indoor", "Air Purifying"]),
    ("Peace Lily", 349.0, &["Indoor", "Flowering", "Air Purifying"]),
    ("Aloe Vera", 149.0, &["Indoor", "Succulent", "Low Maintenance"]),
    ("Jade Plant", 249.0, &["Indoor", "Succulent", "Home Decor"]),
    ("ZZ Plant", 399.0, &["Indoor", "Low Maintenance"]),
    ("Rubber Plant", 399.0, &["Indoor", "Home Decor"]),
    ("Spider Plant", 199.0, &["Indoor", "Air Purifying", "Hanging"]),
    ("Boston Fern", 249.0, &["Indoor", "Hanging", "Foliage"]),
    ("Bamboo Palm", 399.0, &["Indoor", "Air Purifying"]),
    ("Croton", 299.0, &["Indoor", "Foliage", "Home Decor"]),
    ("Ficus Benjamina", 499.0, &["Indoor", "Home Decor"]),
    ("Fiddle Leaf Fig", 799.0, &["Indoor", "Home Decor"]),
    ("Aglaonema", 349.0, &["Indoor", "Low Maintenance"]),
    ("Philodendron", 299.0, &["Indoor", "Low Maintenance"]),
    ("Monstera Deliciosa", 699.0, &["Indoor", "Home Decor"]),
    ("Dracaena", 279.0, &["Indoor", "Air Purifying"]),
    ("Calathea", 349.0, &["Indoor", "Foliage"]),
    ("Dieffenbachia", 279.0, &["Indoor", "Foliage"]),
    ("Peperomia", 199.0, &["Indoor", "Low Maintenance"]),
    ("Schefflera", 299.0, &["Indoor", "Home Decor"]),
    ("Anthurium", 399.0, &["Indoor", "Flowering", "Home Decor"]),
    ("Begonia", 249.0, &["Indoor", "Flowering"]),
    ("Ponytail Palm", 449.0, &["Indoor", "Low Maintenance"]),
    ("Pothos Marble Queen", 229.0, &["Indoor", "Hanging", "Low Maintenance"]),
    ("Syngonium", 189.0, &["Indoor", "Foliage"]),
    ("Areca Palm Dwarf", 379.0, &["Indoor", "Air Purifying"]),
    ("Cactus Mix", 159.0, &["Indoor", "Succulent"]),
    ("Haworthia", 179.0, &["Indoor", "Succulent", "Low Maintenance"]),
    ("Kalanchoe", 199.0, &["Indoor", "Succulent", "Flowering"]),
    ("Rhoeo", 169.0, &["Outdoor", "Foliage"]),
    ("Bougainvillea", 199.0, &["Outdoor", "Flowering"]),
    ("Hibiscus", 249.0, &["Outdoor", "Flowering"]),
    ("Jasmine", 299.0, &["Outdoor", "Flowering", "Fragrant"]),
    ("Rose (Desi)", 199.0, &["Outdoor", "Flowering"]),
    ("Lavender", 349.0, &["Outdoor", "Fragrant"]),
    ("Mint", 99.0, &["Outdoor", "Herb"]),
    ("Basil (Tulsi)", 99.0, &["Outdoor", "Herb"]),
    ("Curry Leaf Plant", 149.0, &["Outdoor", "Herb"]),
    ("Adenium (Desert Rose)", 499.0, &["Outdoor", "Succulent", "Flowering"]),
    ("Portulaca", 99.0, &["Outdoor", "Flowering", "Succulent"]),
    ("Ixora", 219.0, &["Outdoor", "Flowering"]),
    ("Chrysanthemum", 189.0, &["Outdoor", "Flowering"]),
    ("Coleus", 149.0, &["Outdoor", "Foliage"]),
    ("Cordyline", 249.0, &["Outdoor", "Foliage"]),
    ("Areca Palm Outdoor", 499.0, &["Outdoor", "Air Purifying"]),
    ("Bamboo (Lucky Bamboo)", 249.0, &["Indoor", "Home Decor"]),
    ("Succulent Mix", 199.0, &["Indoor", "Succulent"]),
];

/// The sample set with generated image URLs and descriptions.
pub fn sample_plants() -> Vec<NewPlant> {
    SAMPLE_PLANTS
        .iter()
        .enumerate()
        .map(|(idx, (name, price, categories))| {
            let description = format!(
                "{} is a beautiful plant suitable for {} environments.",
                name,
                categories.join(", ").to_lowercase()
            );
            NewPlant::new(*name, *price)
                .with_categories(categories.iter().copied())
                .with_image_url(format!("https://picsum.photos/seed/plant_{}/400/300", idx))
                .with_description(description)
        })
        .collect()
}

/// Clears `store` and inserts the sample set. Returns the number inserted.
pub async fn seed_store(store: &dyn PlantStore) -> Result<usize> {
    store.clear().await.context("Failed to clear store before seeding")?;

    let plants = sample_plants();
    let total = plants.len();
    for plant in plants {
        let name = plant.name.clone();
        store
            .insert(plant)
            .await
            .with_context(|| format!("Failed to insert sample plant {}", name))?;
    }

    tracing::info!("Inserted {} plants.", total);
    Ok(total)
}
