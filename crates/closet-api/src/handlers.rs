//! HTTP request handlers for the closet service.
//!
//! Inventory CRUD goes straight to the store. Recommendations take one
//! snapshot of the store and hand it to the stylist, so a concurrent add or
//! remove cannot change the inventory halfway through a recommendation.

use crate::wire::{
    AddGarmentRequest, ErrorResponse, GarmentRecord, HealthResponse, OutfitRecord,
    RecommendRequest, RemoveResponse,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use closet_domain::{ClosetStore, DomainError, GarmentId, NewGarment, RecommendationRequest};
use closet_engine::Stylist;
use closet_store::StoreError;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

/// Store handle shared by all handlers
pub type SharedStore = Arc<dyn ClosetStore<Error = StoreError>>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Garment inventory
    pub store: SharedStore,
    /// Outfit recommender
    pub stylist: Arc<Stylist>,
}

impl AppState {
    /// Bundle a store and a stylist
    pub fn new(store: SharedStore, stylist: Stylist) -> Self {
        Self {
            store,
            stylist: Arc::new(stylist),
        }
    }
}

/// Application error type
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request
    InvalidArgument(String),
    /// Garment lookup missed
    NotFound(String),
    /// Store failure
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => {
                error!("Request failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError::InvalidArgument(e.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => ApiError::NotFound(e.to_string()),
            StoreError::Database(_) | StoreError::InvalidData(_) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

fn records(store: &SharedStore) -> Result<Vec<GarmentRecord>, ApiError> {
    Ok(store.list_garments()?.iter().map(GarmentRecord::from).collect())
}

/// GET /closet - List garments in insertion order
async fn list_garments(
    State(state): State<AppState>,
) -> Result<Json<Vec<GarmentRecord>>, ApiError> {
    Ok(Json(records(&state.store)?))
}

/// POST /closet - Add a garment
async fn add_garment(
    State(state): State<AppState>,
    Json(request): Json<AddGarmentRequest>,
) -> Result<Json<GarmentRecord>, ApiError> {
    let new = NewGarment::try_from(request)?;
    let garment = state.store.add_garment(new)?;
    Ok(Json(GarmentRecord::from(&garment)))
}

/// GET /closet/:id - Fetch one garment
async fn get_garment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GarmentRecord>, ApiError> {
    let id: GarmentId = id.parse()?;
    let garment = state.store.get_garment(id)?;
    Ok(Json(GarmentRecord::from(&garment)))
}

/// DELETE /closet/:id - Remove a garment
///
/// Idempotent: an id that is not in the closet is not an error. Responds
/// with the inventory as it stands after the removal.
async fn remove_garment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RemoveResponse>, ApiError> {
    let id: GarmentId = id.parse()?;
    state.store.remove_garment(id)?;
    Ok(Json(RemoveResponse {
        ok: true,
        items: records(&state.store)?,
    }))
}

/// POST /recommendations - Recommend an outfit
async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<OutfitRecord>, ApiError> {
    let request = RecommendationRequest::try_from(request)?;
    let snapshot = state.store.list_garments()?;
    let outfit = state.stylist.recommend(&snapshot, &request);

    debug!(
        "Recommended {} items for {} from {} garments",
        outfit.items.len(),
        outfit.occasion,
        snapshot.len()
    );
    if let Some(notes) = &outfit.notes {
        info!("Outfit notes for {}: {}", outfit.occasion, notes);
    }

    Ok(Json(OutfitRecord::from(&outfit)))
}

/// GET /health - Liveness plus inventory size
async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let garments = state.store.list_garments()?.len();
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        garments,
    }))
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/closet", get(list_garments).post(add_garment))
        .route("/closet/:id", get(get_garment).delete(remove_garment))
        .route("/recommendations", post(recommend))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
