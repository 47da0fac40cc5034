//! Body-shop assignment model.
//!
//! Assignments are not exposed over HTTP; they surface only as the
//! aggregated `team_members` of a project.

use crm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `bodyshop_assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    pub id: DbId,
    pub project_id: DbId,
    pub person_id: DbId,
    pub role: Option<String>,
    pub allocation_percentage: i32,
    pub created_at: Timestamp,
}

/// DTO for placing a person on a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignment {
    pub project_id: DbId,
    pub person_id: DbId,
    pub role: Option<String>,
    /// Defaults to 100 if omitted.
    pub allocation_percentage: Option<i32>,
}
