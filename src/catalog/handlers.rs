use super::error::{CatalogError, ValidationError};
use super::service::CatalogService;
use super::types::{
    CategoriesResponse, CreatePlantRequest, HealthResponse, ListParams, Plant, PlantPage,
};
use axum::extract::Query;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::{Extension, Json};

pub async fn handle_list_plants(
    Extension(catalog): Extension<CatalogService>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<(StatusCode, Json<PlantPage>), CatalogError> {
    let params = match pairs {
        Ok(Query(pairs)) => ListParams::from_pairs(pairs),
        Err(e) => {
            tracing::warn!("Ignoring unparseable query string: {}", e);
            ListParams::default()
        }
    };

    let page = catalog.list(&params).await?;
    Ok((StatusCode::OK, Json(page)))
}

pub async fn handle_list_categories(
    Extension(catalog): Extension<CatalogService>,
) -> Result<(StatusCode, Json<CategoriesResponse>), CatalogError> {
    let categories = catalog.categories().await?;
    Ok((StatusCode::OK, Json(CategoriesResponse { categories })))
}

pub async fn handle_create_plant(
    Extension(catalog): Extension<CatalogService>,
    body: Result<Json<CreatePlantRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Plant>), CatalogError> {
    // Without a JSON content type the body is treated as an empty object,
    // so validation reports the first missing field.
    let req = match body {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_)) => CreatePlantRequest::default(),
        Err(e) => {
            tracing::debug!("Rejected create body: {}", e);
            return Err(ValidationError::InvalidBody.into());
        }
    };

    let plant = catalog.create(req).await?;
    Ok((StatusCode::CREATED, Json(plant)))
}

pub async fn handle_health() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
}
