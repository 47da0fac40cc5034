//! Project entity model and DTOs.

use crm_core::error::CoreError;
use crm_core::project_status::{validate_date_order, validate_figures, ProjectStatus};
use crm_core::types::{Date, DbId, Timestamp};
use crm_core::validation::{require_non_blank, validate_tags, ValidateInput};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One person on a project's team, aggregated from `bodyshop_assignments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub person_id: DbId,
    pub person_name: String,
    pub role: Option<String>,
    pub allocation_percentage: i32,
}

/// A `projects` row joined with its client and aggregated team.
///
/// `client_name` / `client_company` are `None` when the project has no
/// client or the client was deleted. `team_members` is never null; a project
/// without assignments has an empty list.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub client_id: Option<DbId>,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub budget: f64,
    pub spent: f64,
    pub progress: i32,
    pub team_size: i32,
    pub description: Option<String>,
    pub technologies: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub client_name: Option<String>,
    pub client_company: Option<String>,
    #[sqlx(json)]
    pub team_members: Vec<TeamMember>,
}

/// DTO for creating a project.
///
/// Numeric fields default to `budget = 0`, `spent = 0`, `progress = 0`,
/// `team_size = 1`; `technologies` defaults to empty and `status` to planning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub client_id: Option<DbId>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub budget: Option<f64>,
    pub spent: Option<f64>,
    pub progress: Option<i32>,
    pub team_size: Option<i32>,
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl CreateProject {
    pub fn status_or_default(&self) -> ProjectStatus {
        self.status.unwrap_or_default()
    }

    pub fn budget_or_default(&self) -> f64 {
        self.budget.unwrap_or(0.0)
    }

    pub fn spent_or_default(&self) -> f64 {
        self.spent.unwrap_or(0.0)
    }

    /// Progress after defaulting and the status convention are applied.
    pub fn effective_progress(&self) -> i32 {
        self.status_or_default()
            .normalize_progress(self.progress.unwrap_or(0))
    }

    pub fn team_size_or_default(&self) -> i32 {
        self.team_size.unwrap_or(1)
    }
}

impl ValidateInput for CreateProject {
    fn validate(&self) -> Result<(), CoreError> {
        require_non_blank(&self.name, "name")?;
        validate_date_order(self.start_date, self.end_date)?;
        validate_figures(
            self.budget_or_default(),
            self.spent_or_default(),
            self.progress.unwrap_or(0),
            self.team_size_or_default(),
        )?;
        validate_tags(&self.technologies, "technologies")
    }
}

/// DTO for replacing a project (PUT). Every column is supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProject {
    pub name: String,
    pub client_id: Option<DbId>,
    pub status: ProjectStatus,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub budget: f64,
    pub spent: f64,
    pub progress: i32,
    pub team_size: i32,
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl UpdateProject {
    /// Progress after the status convention is applied.
    pub fn effective_progress(&self) -> i32 {
        self.status.normalize_progress(self.progress)
    }
}

impl From<&Project> for UpdateProject {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            client_id: project.client_id,
            status: project.status,
            start_date: project.start_date,
            end_date: project.end_date,
            budget: project.budget,
            spent: project.spent,
            progress: project.progress,
            team_size: project.team_size,
            description: project.description.clone(),
            technologies: project.technologies.clone(),
        }
    }
}

impl ValidateInput for UpdateProject {
    fn validate(&self) -> Result<(), CoreError> {
        require_non_blank(&self.name, "name")?;
        validate_date_order(self.start_date, self.end_date)?;
        validate_figures(self.budget, self.spent, self.progress, self.team_size)?;
        validate_tags(&self.technologies, "technologies")
    }
}
