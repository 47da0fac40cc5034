//! Shared response bodies for API handlers.

use serde::Serialize;

/// Confirmation body returned by successful DELETE requests.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}

impl DeletedResponse {
    /// `"<Entity> deleted successfully"`.
    pub fn for_entity(entity: &str) -> Self {
        Self {
            message: format!("{entity} deleted successfully"),
        }
    }
}
