//! Repository for the `projects` table.
//!
//! Every read and write returns the denormalized listing row: the project
//! joined with its client's name/company and its team aggregated from
//! `bodyshop_assignments`. Writes use a data-modifying CTE so the joined row
//! still comes back from a single statement.

use crm_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Project columns, qualified with the `p` alias used by [`listing_query`].
const PROJECT_COLUMNS: &str = "p.id, p.name, p.client_id, p.status, p.start_date, p.end_date, \
     p.budget, p.spent, p.progress, p.team_size, p.description, p.technologies, \
     p.created_at, p.updated_at";

/// Build the aggregation query over `source` (a table or CTE name).
///
/// `tail` is appended after `GROUP BY` (e.g. an `ORDER BY`). `filter` is an
/// optional `WHERE` clause applied before grouping.
fn listing_query(prefix: &str, source: &str, filter: &str, tail: &str) -> String {
    format!(
        "{prefix}
         SELECT {PROJECT_COLUMNS},
                c.name AS client_name,
                c.company AS client_company,
                COALESCE(
                    jsonb_agg(
                        DISTINCT jsonb_build_object(
                            'person_id', ba.person_id,
                            'person_name', pe.name,
                            'role', ba.role,
                            'allocation_percentage', ba.allocation_percentage
                        )
                    ) FILTER (WHERE ba.person_id IS NOT NULL),
                    '[]'::jsonb
                ) AS team_members
         FROM {source} p
         LEFT JOIN clients c ON p.client_id = c.id
         LEFT JOIN bodyshop_assignments ba ON p.id = ba.project_id
         LEFT JOIN people pe ON ba.person_id = pe.id
         {filter}
         GROUP BY {PROJECT_COLUMNS}, c.name, c.company
         {tail}"
    )
}

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created listing row.
    ///
    /// Omitted numeric fields fall back to `budget = 0`, `spent = 0`,
    /// `progress = 0`, `team_size = 1`. The status/progress convention is
    /// applied before the insert.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = listing_query(
            "WITH written AS (
                INSERT INTO projects
                    (name, client_id, status, start_date, end_date, budget, spent,
                     progress, team_size, description, technologies)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                RETURNING *
             )",
            "written",
            "",
            "",
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(input.client_id)
            .bind(input.status_or_default().as_str())
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.budget_or_default())
            .bind(input.spent_or_default())
            .bind(input.effective_progress())
            .bind(input.team_size_or_default())
            .bind(&input.description)
            .bind(&input.technologies)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = listing_query("", "projects", "WHERE p.id = $1", "");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = listing_query("", "projects", "", "ORDER BY p.created_at DESC, p.id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Replace every editable column of a project and refresh `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = listing_query(
            "WITH written AS (
                UPDATE projects SET
                    name = $2, client_id = $3, status = $4, start_date = $5,
                    end_date = $6, budget = $7, spent = $8, progress = $9,
                    team_size = $10, description = $11, technologies = $12,
                    updated_at = NOW()
                WHERE id = $1
                RETURNING *
             )",
            "written",
            "",
            "",
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.client_id)
            .bind(input.status.as_str())
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.budget)
            .bind(input.spent)
            .bind(input.effective_progress())
            .bind(input.team_size)
            .bind(&input.description)
            .bind(&input.technologies)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    ///
    /// Assignments cascade; people pointing at it as their current project
    /// are detached.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
