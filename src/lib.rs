//! Plant Catalog Service Library
//!
//! The modules behind the `plant-catalog` binary (`main.rs`): a small REST
//! API for browsing and creating plants in a shop catalog.
//!
//! ## Modules
//! - **`catalog`**: Query building, payload validation, the catalog operations
//!   (list, categories, create) and their HTTP handlers.
//! - **`storage`**: The `PlantStore` seam, storage-level filters and the
//!   in-memory backend.
//! - **`server`**: Route table, request logging and the serve loop.
//! - **`config`**: Layered configuration from defaults, environment and flags.
//! - **`seed`**: Sample catalog data for demos.

pub mod catalog;
pub mod config;
pub mod seed;
pub mod server;
pub mod storage;
