//! Repository for the `bodyshop_assignments` join table.

use sqlx::PgPool;

use crate::models::assignment::{Assignment, CreateAssignment};

const COLUMNS: &str = "id, project_id, person_id, role, allocation_percentage, created_at";

/// Default share of a person's time given to one project.
const DEFAULT_ALLOCATION: i32 = 100;

/// Writes placements; reads happen through the project aggregation.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Place a person on a project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAssignment) -> Result<Assignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO bodyshop_assignments (project_id, person_id, role, allocation_percentage)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(input.project_id)
            .bind(input.person_id)
            .bind(&input.role)
            .bind(input.allocation_percentage.unwrap_or(DEFAULT_ALLOCATION))
            .fetch_one(pool)
            .await
    }
}
