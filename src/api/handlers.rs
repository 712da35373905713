//! API Handlers
//!
//! HTTP request handlers for each service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::cache::PropertyCache;
use crate::error::{AppError, Result};
use crate::metrics::{get_redis_cache_metrics, MetricsReport};
use crate::models::{
    CreatePropertyRequest, CreatedResponse, DeleteResponse, HealthResponse, Property,
    PropertyListResponse,
};
use crate::repository::PropertyRepository;
use crate::store::StoreAdmin;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-through listing cache
    pub cache: Arc<PropertyCache>,
    /// Authoritative property repository
    pub repo: Arc<dyn PropertyRepository>,
    /// Admin capability of the store backing the cache
    pub admin: Arc<dyn StoreAdmin>,
}

impl AppState {
    /// Creates a new AppState from its collaborators.
    pub fn new(
        cache: Arc<PropertyCache>,
        repo: Arc<dyn PropertyRepository>,
        admin: Arc<dyn StoreAdmin>,
    ) -> Self {
        Self { cache, repo, admin }
    }
}

/// Handler for GET /properties
///
/// Serves the full property listing through the read-through cache. A store
/// failure propagates and fails the request.
pub async fn list_properties_handler(
    State(state): State<AppState>,
) -> Result<Json<PropertyListResponse>> {
    let properties = state.cache.get_all_properties().await?;
    Ok(Json(PropertyListResponse::new(properties)))
}

/// Handler for POST /properties
///
/// Validates and inserts a property. The repository publishes the saved
/// event that drives cache invalidation.
pub async fn create_property_handler(
    State(state): State<AppState>,
    Json(req): Json<CreatePropertyRequest>,
) -> Result<Json<CreatedResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let property = Property::new(req.title, req.description, req.price, req.location);
    let created = state.repo.insert(property).await?;

    Ok(Json(CreatedResponse::new(created)))
}

/// Handler for DELETE /properties/:id
///
/// Removes a property by id. The repository publishes the deleted event
/// that drives cache invalidation.
pub async fn delete_property_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>> {
    state.repo.remove(id).await?;
    Ok(Json(DeleteResponse::new(id)))
}

/// Handler for GET /metrics/cache
///
/// Returns the cache keyspace metrics snapshot, or the degraded report
/// when the store's admin interface cannot be reached. Always responds
/// 200; probe failures surface in the body, never as an HTTP error.
pub async fn cache_metrics_handler(State(state): State<AppState>) -> Json<MetricsReport> {
    Json(get_redis_cache_metrics(state.admin.as_ref()).await)
}

/// Handler for GET /health
///
/// Returns health status of the service.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::events::PropertyEvents;
    use crate::repository::InMemoryPropertyRepository;
    use crate::store::MemoryStore;

    fn test_state() -> AppState {
        let store = Arc::new(MemoryStore::new());
        let repo = Arc::new(InMemoryPropertyRepository::new(PropertyEvents::new()));
        let cache = Arc::new(PropertyCache::new(store.clone(), repo.clone()));
        AppState::new(cache, repo, store)
    }

    fn create_request() -> CreatePropertyRequest {
        CreatePropertyRequest {
            title: "Townhouse".to_string(),
            description: "Three floors".to_string(),
            price: 310_000.0,
            location: "Delft".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_list_handlers() {
        let state = test_state();

        let created = create_property_handler(State(state.clone()), Json(create_request()))
            .await
            .unwrap();
        assert_eq!(created.property.title, "Townhouse");

        let listing = list_properties_handler(State(state)).await.unwrap();
        assert_eq!(listing.count, 1);
        assert_eq!(listing.properties[0].id, created.property.id);
    }

    #[tokio::test]
    async fn test_create_handler_rejects_invalid_request() {
        let state = test_state();
        let mut req = create_request();
        req.title = String::new();

        let result = create_property_handler(State(state), Json(req)).await;
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_delete_handler() {
        let state = test_state();
        let created = create_property_handler(State(state.clone()), Json(create_request()))
            .await
            .unwrap();

        let result =
            delete_property_handler(State(state.clone()), Path(created.property.id)).await;
        assert!(result.is_ok());

        let remaining = state.repo.list_all().await.unwrap();
        assert!(remaining.is_empty());
    }

    #[tokio::test]
    async fn test_delete_handler_unknown_id() {
        let state = test_state();

        let result = delete_property_handler(State(state), Path(Uuid::new_v4())).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_cache_metrics_handler() {
        let state = test_state();

        // One miss via the listing read
        list_properties_handler(State(state.clone())).await.unwrap();

        let report = cache_metrics_handler(State(state)).await;
        match report.0 {
            MetricsReport::Available(snapshot) => assert_eq!(snapshot.misses, 1),
            other => panic!("Expected available report, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
