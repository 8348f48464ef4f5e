//! Demand API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::services::DemandService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use fitsenior_shared::types::{CreateDemandRequest, Demand, UpdateDemandRequest};

/// Create demand routes
pub fn demand_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_demands).post(create_demand))
        .route("/:id", get(get_demand).put(update_demand).delete(delete_demand))
}

async fn list_demands(State(state): State<AppState>, _auth: AuthUser) -> Result<Json<Vec<Demand>>, ApiError> {
    let demands = DemandService::list_demands(state.db()).await?;
    Ok(Json(demands))
}

async fn get_demand(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Demand>, ApiError> {
    let demand = DemandService::get_demand(state.db(), &id).await?;
    Ok(Json(demand))
}

/// POST /demands - Register interest in an activity
async fn create_demand(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(req): ApiJson<CreateDemandRequest>,
) -> Result<(StatusCode, Json<Demand>), ApiError> {
    let demand = DemandService::create_demand(state.db(), &auth, req).await?;
    Ok((StatusCode::CREATED, Json(demand)))
}

async fn update_demand(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateDemandRequest>,
) -> Result<Json<Demand>, ApiError> {
    let demand = DemandService::update_demand(state.db(), &auth, &id, req).await?;
    Ok(Json(demand))
}

async fn delete_demand(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    DemandService::delete_demand(state.db(), &auth, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
