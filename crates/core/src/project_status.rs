//! Project lifecycle status and the rules tied to it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Date;
use crate::validation::{validate_int_range, validate_non_negative};

/// Lower bound for `progress`.
pub const PROGRESS_MIN: i32 = 0;

/// Upper bound for `progress`.
pub const PROGRESS_MAX: i32 = 100;

/// Smallest allowed `team_size`.
pub const MIN_TEAM_SIZE: i32 = 1;

/// Where a project is in its lifecycle. Stored as kebab-case text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    Active,
    OnHold,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::Planning,
        ProjectStatus::Active,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
        ProjectStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::Active => "active",
            ProjectStatus::OnHold => "on-hold",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Cancelled => "cancelled",
        }
    }

    /// Apply the progress convention for this status.
    ///
    /// A completed project is always at 100, a project still in planning is
    /// always at 0. Every other status keeps the given value.
    pub fn normalize_progress(self, progress: i32) -> i32 {
        match self {
            ProjectStatus::Completed => PROGRESS_MAX,
            ProjectStatus::Planning => PROGRESS_MIN,
            _ => progress,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid project status '{s}'. Must be one of: {}",
                    ProjectStatus::ALL.map(ProjectStatus::as_str).join(", ")
                ))
            })
    }
}

impl TryFrom<String> for ProjectStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Require `end >= start` when both dates are present.
pub fn validate_date_order(start: Option<Date>, end: Option<Date>) -> Result<(), CoreError> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(CoreError::Validation(format!(
                "end_date {end} must not be before start_date {start}"
            )));
        }
    }
    Ok(())
}

/// Storage-level numeric rules for a project row.
///
/// `spent <= budget` is deliberately not checked here; overspending is a
/// form-level warning, not a storage invariant.
pub fn validate_figures(
    budget: f64,
    spent: f64,
    progress: i32,
    team_size: i32,
) -> Result<(), CoreError> {
    validate_non_negative(budget, "budget")?;
    validate_non_negative(spent, "spent")?;
    validate_int_range(progress, PROGRESS_MIN, PROGRESS_MAX, "progress")?;
    if team_size < MIN_TEAM_SIZE {
        return Err(CoreError::Validation(format!(
            "team_size must be at least {MIN_TEAM_SIZE}, got {team_size}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn parses_every_wire_value() {
        for status in ProjectStatus::ALL {
            assert_eq!(status.as_str().parse::<ProjectStatus>().unwrap(), status);
        }
    }

    #[test]
    fn rejects_unknown_status() {
        let err = "paused".parse::<ProjectStatus>().unwrap_err();
        assert!(err.to_string().contains("Invalid project status 'paused'"));
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&ProjectStatus::OnHold).unwrap();
        assert_eq!(json, "\"on-hold\"");
        let parsed: ProjectStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, ProjectStatus::Cancelled);
    }

    #[test]
    fn completed_forces_full_progress() {
        assert_eq!(ProjectStatus::Completed.normalize_progress(35), 100);
    }

    #[test]
    fn planning_forces_zero_progress() {
        assert_eq!(ProjectStatus::Planning.normalize_progress(60), 0);
    }

    #[test]
    fn other_statuses_keep_progress() {
        assert_eq!(ProjectStatus::Active.normalize_progress(42), 42);
        assert_eq!(ProjectStatus::OnHold.normalize_progress(42), 42);
        assert_eq!(ProjectStatus::Cancelled.normalize_progress(42), 42);
    }

    #[test]
    fn end_before_start_rejected() {
        assert!(validate_date_order(Some(date("2025-03-01")), Some(date("2025-02-28"))).is_err());
        assert!(validate_date_order(Some(date("2025-03-01")), Some(date("2025-03-01"))).is_ok());
        assert!(validate_date_order(None, Some(date("2025-03-01"))).is_ok());
    }

    #[test]
    fn figures_checked_against_bounds() {
        assert!(validate_figures(1000.0, 1200.0, 50, 3).is_ok());
        assert!(validate_figures(-1.0, 0.0, 0, 1).is_err());
        assert!(validate_figures(0.0, 0.0, 101, 1).is_err());
        assert!(validate_figures(0.0, 0.0, 0, 0).is_err());
    }
}
