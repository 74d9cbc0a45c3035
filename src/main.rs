use plant_catalog::config::{ServerConfig, usage};
use plant_catalog::seed::seed_store;
use plant_catalog::server::{build_router, cors_layer, serve, shutdown_signal};
use plant_catalog::storage::{MemoryPlantStore, PlantStore};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--help" || arg == "-h") {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| "plant-catalog".to_string());
        println!("{}", usage(&program));
        return Ok(());
    }

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            eprintln!("{}", usage("plant-catalog"));
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    tracing::info!("Starting plant catalog on {}", config.bind_addr);

    // 1. Storage:
    let store: Arc<dyn PlantStore> = Arc::new(MemoryPlantStore::new());

    if config.seed {
        let inserted = seed_store(store.as_ref()).await?;
        tracing::info!("Seeded catalog with {} sample plants", inserted);
    } else {
        tracing::info!("Starting with an empty catalog (use --seed for sample data)");
    }

    // 2. HTTP Router:
    let cors = cors_layer(&config.cors_origin)?;
    tracing::info!("CORS allowed origins: {}", config.cors_origin);
    let app = build_router(store, cors);

    // 3. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);
    tracing::info!("Press Ctrl+C to shutdown");

    serve(listener, app, shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}
