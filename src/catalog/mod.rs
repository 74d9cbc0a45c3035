//! Catalog Service Module
//!
//! The plant catalog exposed over HTTP.
//!
//! ## Overview
//! Requests flow handler → `CatalogService` → `PlantStore`. The service owns
//! the business rules (query normalization, payload validation, category
//! ordering); handlers only extract input and shape responses.
//!
//! ## Submodules
//! - **`query`**: Query builder turning list parameters into a filter and a page window.
//! - **`validation`**: Normalization and validation of create payloads.
//! - **`service`**: List, categories and create operations.
//! - **`handlers`**: Axum request handlers.
//! - **`error`**: Validation and storage failures and their HTTP mapping.
//! - **`types`**: The `Plant` entity and the API DTOs.

pub mod error;
pub mod handlers;
pub mod query;
pub mod service;
pub mod types;
pub mod validation;


pub use service::CatalogService;
