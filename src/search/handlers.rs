use super::engine::FoodSearchService;
use super::query::{parse_limit, resolve_popular_limit};
use super::types::{
    CategoriesResponse, FoodResponse, HealthResponse, PopularResponse, SearchRequest,
    SearchResponse,
};
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FoodParams {
    #[serde(default)]
    pub include_id: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct PopularParams {
    pub limit: Option<String>,
}

// Store calls are synchronous, so each one runs on the blocking pool. A task
// that panics surfaces as a JoinError, which is the only case reported as a
// server error.

pub async fn handle_search(
    Extension(service): Extension<Arc<FoodSearchService>>,
    Query(params): Query<SearchParams>,
) -> (StatusCode, Json<SearchResponse>) {
    let query = params.q.trim().to_string();
    let request = SearchRequest {
        query: query.clone(),
        limit: parse_limit(params.limit.as_deref()),
        category: params
            .category
            .filter(|category| !category.trim().is_empty()),
    };

    match tokio::task::spawn_blocking(move || service.search(&request)).await {
        Ok(outcome) => {
            if outcome.is_failure() {
                tracing::warn!("Search for {:?} degraded to no results: {:?}", query, outcome);
            } else {
                tracing::debug!("Search for {:?}: {:?}", query, outcome);
            }
            let results = outcome.into_results();
            (StatusCode::OK, Json(SearchResponse::ok(query, results)))
        }
        Err(e) => {
            tracing::error!("Search task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SearchResponse::failed(params.q, e.to_string())),
            )
        }
    }
}

pub async fn handle_categories(
    Extension(service): Extension<Arc<FoodSearchService>>,
) -> (StatusCode, Json<CategoriesResponse>) {
    match tokio::task::spawn_blocking(move || service.get_all_categories()).await {
        Ok(categories) => (
            StatusCode::OK,
            Json(CategoriesResponse {
                success: true,
                error: None,
                count: categories.len(),
                categories,
            }),
        ),
        Err(e) => {
            tracing::error!("Categories task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(CategoriesResponse {
                    success: false,
                    error: Some(e.to_string()),
                    categories: Vec::new(),
                    count: 0,
                }),
            )
        }
    }
}

pub async fn handle_get_food(
    Extension(service): Extension<Arc<FoodSearchService>>,
    Path(food_id): Path<String>,
    Query(params): Query<FoodParams>,
) -> (StatusCode, Json<FoodResponse>) {
    match tokio::task::spawn_blocking(move || service.get_food_record_by_id(&food_id)).await {
        Ok(Some(record)) => {
            let id = record
                .id
                .as_ref()
                .filter(|_| params.include_id)
                .map(|id| id.to_string());
            (
                StatusCode::OK,
                Json(FoodResponse {
                    success: true,
                    error: None,
                    id,
                    food: Some(record.into()),
                }),
            )
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(FoodResponse {
                success: false,
                error: Some("Food not found".to_string()),
                id: None,
                food: None,
            }),
        ),
        Err(e) => {
            tracing::error!("Food lookup task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FoodResponse {
                    success: false,
                    error: Some(e.to_string()),
                    id: None,
                    food: None,
                }),
            )
        }
    }
}

pub async fn handle_popular(
    Extension(service): Extension<Arc<FoodSearchService>>,
    Query(params): Query<PopularParams>,
) -> (StatusCode, Json<PopularResponse>) {
    let limit = resolve_popular_limit(parse_limit(params.limit.as_deref()));

    match tokio::task::spawn_blocking(move || service.get_popular_foods(limit)).await {
        Ok(results) => (
            StatusCode::OK,
            Json(PopularResponse {
                success: true,
                error: None,
                count: results.len(),
                results,
            }),
        ),
        Err(e) => {
            tracing::error!("Popular foods task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(PopularResponse {
                    success: false,
                    error: Some(e.to_string()),
                    results: Vec::new(),
                    count: 0,
                }),
            )
        }
    }
}

pub async fn handle_health(
    Extension(service): Extension<Arc<FoodSearchService>>,
) -> (StatusCode, Json<HealthResponse>) {
    let healthy = match tokio::task::spawn_blocking(move || service.is_healthy()).await {
        Ok(healthy) => healthy,
        Err(e) => {
            tracing::error!("Health check task failed: {}", e);
            false
        }
    };

    if healthy {
        (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
            }),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "unavailable".to_string(),
            }),
        )
    }
}
