//! Request extractors that validate before a handler runs.

use axum::extract::{FromRequest, Request};
use axum::Json;
use crm_core::validation::ValidateInput;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body that has been deserialized into `T` and passed `T::validate`.
///
/// Malformed JSON, missing required fields and wrongly typed values become
/// [`AppError::BadRequest`]; rule violations become `CoreError::Validation`.
/// Both surface as 400 before any query is built.
///
/// ```ignore
/// async fn create(State(state): State<AppState>, ValidJson(input): ValidJson<CreateClient>) { .. }
/// ```
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + ValidateInput,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidJson(value))
    }
}
