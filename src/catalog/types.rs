//! Catalog Data Types
//!
//! The `Plant` entity as stored and returned by the API, plus the DTOs that
//! make up the HTTP contract of the catalog endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sellable catalog item.
///
/// Records are created once and never mutated, so `updated_at` always equals
/// `created_at`. The identifier is serialized as `_id`, the key clients read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    pub categories: Vec<String>,
    pub in_stock: bool,
    pub image_url: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated plant that has not been persisted yet.
///
/// The store assigns the identifier and the timestamps on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlant {
    pub name: String,
    pub price: f64,
    pub categories: Vec<String>,
    pub in_stock: bool,
    pub image_url: String,
    pub description: String,
}

impl NewPlant {
    /// Plants are in stock unless stated otherwise.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            categories: Vec::new(),
            in_stock: true,
            image_url: String::new(),
            description: String::new(),
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Turns the candidate into a stored record.
    pub fn into_plant(self, id: String, created_at: DateTime<Utc>) -> Plant {
        Plant {
            id,
            name: self.name,
            price: self.price,
            categories: self.categories,
            in_stock: self.in_stock,
            image_url: self.image_url,
            description: self.description,
            created_at,
            updated_at: created_at,
        }
    }
}

/// Raw query-string parameters of `GET /api/plants`.
///
/// Every field is kept as text so that malformed values never reject the
/// request; `PlantQuery::from_params` does the normalization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub in_stock: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListParams {
    /// Builds parameters from decoded query pairs. When a key repeats, the
    /// first value wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" => &mut params.q,
                "category" => &mut params.category,
                "inStock" => &mut params.in_stock,
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// One page of the catalog plus the total number of matching plants.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlantPage {
    pub items: Vec<Plant>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// Body of every non-2xx catalog response.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Candidate payload of `POST /api/plants`.
///
/// Fields are loosely typed on purpose: prices may arrive as numbers or
/// strings, categories as a list or a comma-separated string, and `inStock`
/// as a boolean or the string `"true"`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlantRequest {
    pub name: Option<serde_json::Value>,
    pub price: Option<serde_json::Value>,
    pub categories: Option<serde_json::Value>,
    pub in_stock: Option<serde_json::Value>,
    pub image_url: Option<serde_json::Value>,
    pub description: Option<serde_json::Value>,
}
