//! Handlers for the `/people` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use crm_core::error::CoreError;
use crm_core::types::DbId;
use crm_db::models::person::{CreatePerson, Person, UpdatePerson};
use crm_db::repositories::PersonRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::response::DeletedResponse;
use crate::state::AppState;

const ENTITY: &str = "Person";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// POST /api/people
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreatePerson>,
) -> AppResult<(StatusCode, Json<Person>)> {
    let person = PersonRepo::create(&state.pool, &input).await?;
    tracing::info!(person_id = person.id, "Person created");
    Ok((StatusCode::CREATED, Json(person)))
}

/// GET /api/people -- ordered by name.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Person>>> {
    let people = PersonRepo::list(&state.pool).await?;
    Ok(Json(people))
}

/// GET /api/people/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Person>> {
    let person = PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(person))
}

/// PUT /api/people/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<UpdatePerson>,
) -> AppResult<Json<Person>> {
    let person = PersonRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(person_id = id, "Person updated");
    Ok(Json(person))
}

/// DELETE /api/people/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    if !PersonRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(person_id = id, "Person deleted");
    Ok(Json(DeletedResponse::for_entity(ENTITY)))
}
