//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use crm_core::error::CoreError;
use crm_core::types::DbId;
use crm_db::models::project::{CreateProject, Project, UpdateProject};
use crm_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::response::DeletedResponse;
use crate::state::AppState;

const ENTITY: &str = "Project";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, status = %project.status, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects
///
/// Each row carries its client name/company and aggregated `team_members`.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(project_id = id, "Project updated");
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(project_id = id, "Project deleted");
    Ok(Json(DeletedResponse::for_entity(ENTITY)))
}
