//! Handlers for the `/clients` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use crm_core::error::CoreError;
use crm_core::types::DbId;
use crm_db::models::client::{Client, CreateClient, UpdateClient};
use crm_db::repositories::ClientRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::response::DeletedResponse;
use crate::state::AppState;

const ENTITY: &str = "Client";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// POST /api/clients
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    let client = ClientRepo::create(&state.pool, &input).await?;
    tracing::info!(client_id = client.id, "Client created");
    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(clients))
}

/// GET /api/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(client))
}

/// PUT /api/clients/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<UpdateClient>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(client_id = id, "Client updated");
    Ok(Json(client))
}

/// DELETE /api/clients/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    if !ClientRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(client_id = id, "Client deleted");
    Ok(Json(DeletedResponse::for_entity(ENTITY)))
}
