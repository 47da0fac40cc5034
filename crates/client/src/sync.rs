//! Network operations that keep a [`Store`] in step with the server.
//!
//! Each function marks the store as loading, awaits exactly one request and
//! then either applies the matching mutation and clears the error, or records
//! the failure and leaves `items` as they were. `loading` is always reset.
//! Forms are checked first; an invalid form sends nothing.
//!
//! There is no version check: two overlapping writes to the same id resolve
//! in response order, so callers must not start a second write for an id
//! while one is in flight.

use std::future::Future;

use crm_core::types::DbId;

use crate::api::{CrmApi, Resource};
use crate::error::{ApiError, SyncError};
use crate::filter::Record;
use crate::form::FormCheck;
use crate::store::Store;

async fn tracked<I: Record, T>(
    store: &mut Store<I>,
    request: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    store.set_loading(true);
    let outcome = request.await;
    match &outcome {
        Ok(_) => store.set_error(None),
        Err(err) => {
            tracing::warn!(error = %err, "CRM API request failed");
            store.set_error(Some(err.to_string()));
        }
    }
    store.set_loading(false);
    outcome
}

fn checked(form: &impl FormCheck) -> Result<(), SyncError> {
    let errors = form.check();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(SyncError::Invalid(errors))
    }
}

/// Replace the store's items with the server's full list.
pub async fn reload<R: Resource>(
    api: &CrmApi,
    store: &mut Store<R::Item>,
) -> Result<(), SyncError> {
    let items = tracked(store, api.list::<R>()).await?;
    store.set_items(items);
    Ok(())
}

/// Create on the server, then append the returned row.
pub async fn create<R: Resource>(
    api: &CrmApi,
    store: &mut Store<R::Item>,
    input: &R::Create,
) -> Result<DbId, SyncError> {
    checked(input)?;
    let item = tracked(store, api.create::<R>(input)).await?;
    let id = item.id();
    store.add_item(item);
    Ok(id)
}

/// Replace on the server, then swap in the returned row.
pub async fn update<R: Resource>(
    api: &CrmApi,
    store: &mut Store<R::Item>,
    id: DbId,
    input: &R::Update,
) -> Result<(), SyncError> {
    checked(input)?;
    let item = tracked(store, api.update::<R>(id, input)).await?;
    store.update_item(item);
    Ok(())
}

/// Delete on the server, then drop the local row.
pub async fn delete<R: Resource>(
    api: &CrmApi,
    store: &mut Store<R::Item>,
    id: DbId,
) -> Result<(), SyncError> {
    tracked(store, api.delete::<R>(id)).await?;
    store.remove_item(id);
    Ok(())
}
