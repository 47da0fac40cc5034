//! Person entity model and DTOs.

use crm_core::availability::DEFAULT_AVAILABILITY;
use crm_core::error::CoreError;
use crm_core::types::{DbId, Timestamp};
use crm_core::validation::{require_non_blank, validate_tags, ValidateInput};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A `people` row joined with the name of the person's current project.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Person {
    pub id: DbId,
    pub name: String,
    pub skills: Vec<String>,
    /// Free text, e.g. `Voľný` or `Obsadená`.
    pub availability: String,
    pub current_project_id: Option<DbId>,
    /// Display string such as `€50/hod`.
    pub rate: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub current_project_name: Option<String>,
}

/// DTO for creating a person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePerson {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Defaults to [`DEFAULT_AVAILABILITY`] if omitted.
    pub availability: Option<String>,
    pub current_project_id: Option<DbId>,
    pub rate: Option<String>,
}

/// PUT replaces the whole row; same shape as a create.
pub type UpdatePerson = CreatePerson;

impl CreatePerson {
    pub fn availability_or_default(&self) -> &str {
        self.availability.as_deref().unwrap_or(DEFAULT_AVAILABILITY)
    }
}

impl ValidateInput for CreatePerson {
    fn validate(&self) -> Result<(), CoreError> {
        require_non_blank(&self.name, "name")?;
        validate_tags(&self.skills, "skills")
    }
}
