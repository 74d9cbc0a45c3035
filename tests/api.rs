//! End-to-end API tests: the real router served on an ephemeral port and
//! driven over HTTP.

use plant_catalog::catalog::types::NewPlant;
use plant_catalog::seed::{SAMPLE_PLANTS, seed_store};
use plant_catalog::server::{build_router, cors_layer};
use plant_catalog::storage::{MemoryPlantStore, PlantStore};
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;

struct TestServer {
    base: String,
    client: reqwest::Client,
    _shutdown: oneshot::Sender<()>,
}

impl TestServer {
    async fn start(store: Arc<dyn PlantStore>) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(plant_catalog::server::serve(
            listener,
            build_router(store, cors_layer("*").unwrap()),
            async move {
                let _ = rx.await;
            },
        ));

        Self {
            base: format!("http://{}", addr),
            client: reqwest::Client::new(),
            _shutdown: tx,
        }
    }

    async fn empty() -> Self {
        Self::start(Arc::new(MemoryPlantStore::new())).await
    }

    async fn get(&self, path: &str) -> (u16, Value) {
        let resp = self
            .client
            .get(format!("{}{}", self.base, path))
            .send()
            .await
            .unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    async fn post(&self, path: &str, body: &Value) -> (u16, Value) {
        let resp = self
            .client
            .post(format!("{}{}", self.base, path))
            .json(body)
            .send()
            .await
            .unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }
}

#[tokio::test]
async fn test_health() {
    let server = TestServer::empty().await;

    for path in ["/health", "/api/health"] {
        let (status, body) = server.get(path).await;
        assert_eq!(status, 200);
        assert_eq!(body, json!({ "status": "ok" }));
    }
}

#[tokio::test]
async fn test_create_then_search() {
    let server = TestServer::empty().await;

    let (status, created) = server
        .post(
            "/api/plants",
            &json!({
                "name": "Aloe Vera",
                "price": 149,
                "categories": ["Indoor", "Succulent"],
                "inStock": true
            }),
        )
        .await;

    assert_eq!(status, 201);
    assert_eq!(created["name"], "Aloe Vera");
    assert_eq!(created["price"], 149.0);
    assert_eq!(created["categories"], json!(["Indoor", "Succulent"]));
    assert_eq!(created["inStock"], true);
    assert!(created["_id"].as_str().is_some());

    let (status, page) = server.get("/api/plants?q=aloe").await;
    assert_eq!(status, 200);
    assert!(page["total"].as_u64().unwrap() >= 1);
    assert_eq!(page["items"][0]["_id"], created["_id"]);
    assert_eq!(page["page"], 1);
    assert_eq!(page["limit"], 24);
}

#[tokio::test]
async fn test_create_validation_messages() {
    let server = TestServer::empty().await;

    let (status, body) = server
        .post("/api/plants", &json!({ "name": "  ", "price": 10 }))
        .await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({ "message": "Name is required" }));

    let (status, body) = server
        .post("/api/plants", &json!({ "name": "Fern", "price": -5 }))
        .await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({ "message": "Price must be a non-negative number" }));
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let server = TestServer::empty().await;

    let resp = server
        .client
        .post(format!("{}/api/plants", server.base))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Invalid JSON body");
}

#[tokio::test]
async fn test_create_accepts_comma_separated_categories() {
    let server = TestServer::empty().await;

    let (status, created) = server
        .post(
            "/api/plants",
            &json!({ "name": "Lavender", "price": "349", "categories": "Outdoor, Fragrant" }),
        )
        .await;

    assert_eq!(status, 201);
    assert_eq!(created["price"], 349.0);
    assert_eq!(created["categories"], json!(["Outdoor", "Fragrant"]));
    assert_eq!(created["inStock"], false);
    assert_eq!(created["imageUrl"], "");
    assert_eq!(created["description"], "");
}

#[tokio::test]
async fn test_categories_deduplicated_and_sorted() {
    let store = Arc::new(MemoryPlantStore::new());
    store
        .insert(NewPlant::new("A", 1.0).with_categories(["Indoor", "Outdoor"]))
        .await
        .unwrap();
    store
        .insert(NewPlant::new("B", 2.0).with_categories(["Outdoor", "Succulent"]))
        .await
        .unwrap();
    let server = TestServer::start(store).await;

    let (status, body) = server.get("/api/plants/categories").await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({ "categories": ["Indoor", "Outdoor", "Succulent"] })
    );
}

#[tokio::test]
async fn test_pagination_over_seeded_catalog() {
    let store = Arc::new(MemoryPlantStore::new());
    seed_store(store.as_ref()).await.unwrap();
    let server = TestServer::start(store).await;
    let total = SAMPLE_PLANTS.len() as u64;

    let (_, first) = server.get("/api/plants?limit=10").await;
    assert_eq!(first["total"], total);
    assert_eq!(first["items"].as_array().unwrap().len(), 10);

    let (_, last) = server.get("/api/plants?limit=10&page=5").await;
    assert_eq!(last["items"].as_array().unwrap().len(), (total - 40) as usize);

    let (_, capped) = server.get("/api/plants?limit=500").await;
    assert_eq!(capped["limit"], 100);
    assert_eq!(capped["items"].as_array().unwrap().len(), total as usize);
}

#[tokio::test]
async fn test_malformed_pagination_is_clamped() {
    let store = Arc::new(MemoryPlantStore::new());
    seed_store(store.as_ref()).await.unwrap();
    let server = TestServer::start(store).await;

    let (status, body) = server.get("/api/plants?page=-2&limit=abc").await;

    assert_eq!(status, 200);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 24);
}

#[tokio::test]
async fn test_category_filter_and_sentinel() {
    let store = Arc::new(MemoryPlantStore::new());
    seed_store(store.as_ref()).await.unwrap();
    let server = TestServer::start(store).await;

    let (_, unfiltered) = server.get("/api/plants").await;
    let (_, all) = server.get("/api/plants?category=all").await;
    assert_eq!(all["total"], unfiltered["total"]);

    let (_, air) = server.get("/api/plants?category=air&limit=100").await;
    let items = air["items"].as_array().unwrap();
    assert!(!items.is_empty());
    for item in items {
        let categories = item["categories"].as_array().unwrap();
        assert!(
            categories
                .iter()
                .any(|c| c.as_str().unwrap().to_lowercase().contains("air"))
        );
    }
}

#[tokio::test]
async fn test_in_stock_filter() {
    let store = Arc::new(MemoryPlantStore::new());
    store
        .insert(NewPlant::new("Fern", 10.0))
        .await
        .unwrap();
    store
        .insert(NewPlant::new("Cactus", 5.0).with_in_stock(false))
        .await
        .unwrap();
    let server = TestServer::start(store).await;

    let (_, both) = server.get("/api/plants").await;
    let (_, in_stock) = server.get("/api/plants?inStock=true").await;
    let (_, out_of_stock) = server.get("/api/plants?inStock=false").await;

    assert_eq!(both["total"], 2);
    assert_eq!(in_stock["total"], 1);
    assert_eq!(in_stock["items"][0]["name"], "Fern");
    assert_eq!(out_of_stock["total"], 1);
    assert_eq!(out_of_stock["items"][0]["name"], "Cactus");
}

#[tokio::test]
async fn test_search_text_is_not_a_pattern() {
    let store = Arc::new(MemoryPlantStore::new());
    seed_store(store.as_ref()).await.unwrap();
    let server = TestServer::start(store).await;

    let (status, body) = server.get("/api/plants?q=(pothos)").await;
    assert_eq!(status, 200);
    assert_eq!(body["total"], 1);

    let (status, body) = server.get("/api/plants?q=.*").await;
    assert_eq!(status, 200);
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_duplicate_query_key_keeps_other_filters() {
    let store = Arc::new(MemoryPlantStore::new());
    seed_store(store.as_ref()).await.unwrap();
    let server = TestServer::start(store).await;

    let (_, unfiltered) = server.get("/api/plants").await;
    let (status, body) = server
        .get("/api/plants?category=Outdoor&page=1&page=2")
        .await;

    assert_eq!(status, 200);
    assert_eq!(body["page"], 1);
    assert!(body["total"].as_u64().unwrap() < unfiltered["total"].as_u64().unwrap());
    for item in body["items"].as_array().unwrap() {
        let categories = item["categories"].as_array().unwrap();
        assert!(
            categories
                .iter()
                .any(|c| c.as_str().unwrap().to_lowercase().contains("outdoor"))
        );
    }
}

#[tokio::test]
async fn test_create_without_json_content_type_reports_missing_name() {
    let server = TestServer::empty().await;

    let resp = server
        .client
        .post(format!("{}/api/plants", server.base))
        .body("name=Fern&price=10")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Name is required");
}

// ============================================================
// CORS
// ============================================================

#[tokio::test]
async fn test_cors_header_on_simple_request() {
    let server = TestServer::empty().await;

    let resp = server
        .client
        .get(format!("{}/api/plants", server.base))
        .header("origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_cors_preflight_is_answered() {
    let server = TestServer::empty().await;

    let resp = server
        .client
        .request(reqwest::Method::OPTIONS, format!("{}/api/plants", server.base))
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    assert!(resp.headers().contains_key("access-control-allow-origin"));
    assert!(resp.headers().contains_key("access-control-allow-methods"));
}

#[tokio::test]
async fn test_cors_restricted_origin() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = build_router(
        Arc::new(MemoryPlantStore::new()),
        cors_layer("http://shop.example, http://admin.example").unwrap(),
    );
    tokio::spawn(plant_catalog::server::serve(
        listener,
        router,
        std::future::pending::<()>(),
    ));
    let client = reqwest::Client::new();

    let allowed = client
        .get(format!("http://{}/api/plants", addr))
        .header("origin", "http://admin.example")
        .send()
        .await
        .unwrap();
    assert_eq!(
        allowed
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://admin.example")
    );

    let other = client
        .get(format!("http://{}/api/plants", addr))
        .header("origin", "http://evil.example")
        .send()
        .await
        .unwrap();
    assert!(!other.headers().contains_key("access-control-allow-origin"));
}

#[test]
fn test_cors_layer_rejects_invalid_origin() {
    assert!(cors_layer("http://bad\norigin").is_err());
}
