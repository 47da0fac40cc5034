//! Repository for the `people` table.

use crm_core::types::DbId;
use sqlx::PgPool;

use crate::models::person::{CreatePerson, Person, UpdatePerson};

/// Person columns plus the joined project name, over the `pe` / `pr` aliases.
const COLUMNS: &str = "pe.id, pe.name, pe.skills, pe.availability, pe.current_project_id, \
     pe.rate, pe.created_at, pe.updated_at, pr.name AS current_project_name";

/// Provides CRUD operations for people.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a new person, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePerson) -> Result<Person, sqlx::Error> {
        let query = format!(
            "WITH written AS (
                INSERT INTO people (name, skills, availability, current_project_id, rate)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
             )
             SELECT {COLUMNS}
             FROM written pe
             LEFT JOIN projects pr ON pe.current_project_id = pr.id"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.name)
            .bind(&input.skills)
            .bind(input.availability_or_default())
            .bind(input.current_project_id)
            .bind(&input.rate)
            .fetch_one(pool)
            .await
    }

    /// Find a person by their internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}
             FROM people pe
             LEFT JOIN projects pr ON pe.current_project_id = pr.id
             WHERE pe.id = $1"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all people ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}
             FROM people pe
             LEFT JOIN projects pr ON pe.current_project_id = pr.id
             ORDER BY pe.name ASC, pe.id ASC"
        );
        sqlx::query_as::<_, Person>(&query).fetch_all(pool).await
    }

    /// Replace every editable column of a person and refresh `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePerson,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "WITH written AS (
                UPDATE people SET
                    name = $2, skills = $3, availability = $4,
                    current_project_id = $5, rate = $6, updated_at = NOW()
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS}
             FROM written pe
             LEFT JOIN projects pr ON pe.current_project_id = pr.id"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.skills)
            .bind(input.availability_or_default())
            .bind(input.current_project_id)
            .bind(&input.rate)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a person by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM people WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
