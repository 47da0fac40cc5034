//! Local form validation, run before any request is sent.
//!
//! These rules are stricter than the server's: a client form also needs a
//! phone number, and a project form needs a client, both dates and
//! `spent <= budget`.

use std::collections::BTreeMap;

use crm_core::contact::is_valid_email;
use crm_core::project_status::ProjectStatus;
use crm_core::types::{Date, DbId};
use crm_db::models::client::CreateClient;
use crm_db::models::person::CreatePerson;
use crm_db::models::project::{CreateProject, UpdateProject};

/// Field name to message, one entry per invalid field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

/// A payload that can be checked before submission.
pub trait FormCheck {
    fn check(&self) -> FieldErrors;
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_client_form(form: &CreateClient) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if is_blank(&form.name) {
        errors.add("name", "Name is required");
    }
    if is_blank(&form.email) {
        errors.add("email", "Email is required");
    } else if !is_valid_email(&form.email) {
        errors.add("email", "Invalid email format");
    }
    if is_blank(form.phone.as_deref().unwrap_or_default()) {
        errors.add("phone", "Phone is required");
    }
    errors
}

/// The fields a project form validates, independent of create/update shape.
struct ProjectFields<'a> {
    name: &'a str,
    client_id: Option<DbId>,
    start_date: Option<Date>,
    end_date: Option<Date>,
    budget: f64,
    spent: f64,
}

fn check_project(fields: ProjectFields<'_>) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if is_blank(fields.name) {
        errors.add("name", "Project name is required");
    }
    if fields.client_id.is_none() {
        errors.add("client_id", "Client is required");
    }
    if fields.start_date.is_none() {
        errors.add("start_date", "Start date is required");
    }
    match (fields.start_date, fields.end_date) {
        (_, None) => errors.add("end_date", "End date is required"),
        (Some(start), Some(end)) if end < start => {
            errors.add("end_date", "End date must be after the start date")
        }
        _ => {}
    }
    if fields.spent > fields.budget {
        errors.add("spent", "Spent cannot exceed the budget");
    }
    errors
}

pub fn validate_project_form(form: &CreateProject) -> FieldErrors {
    check_project(ProjectFields {
        name: &form.name,
        client_id: form.client_id,
        start_date: form.start_date,
        end_date: form.end_date,
        budget: form.budget_or_default(),
        spent: form.spent_or_default(),
    })
}

/// Switch a project form's status and apply the progress convention:
/// completed jumps to 100, planning drops to 0, anything else keeps progress.
pub fn apply_status_change(form: &mut CreateProject, status: ProjectStatus) {
    form.status = Some(status);
    form.progress = Some(status.normalize_progress(form.progress.unwrap_or(0)));
}

pub fn validate_person_form(form: &CreatePerson) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if is_blank(&form.name) {
        errors.add("name", "Name is required");
    }
    if form.skills.iter().any(|s| s.trim().is_empty()) {
        errors.add("skills", "Skills must not contain blank entries");
    }
    errors
}

impl FormCheck for CreateClient {
    fn check(&self) -> FieldErrors {
        validate_client_form(self)
    }
}

impl FormCheck for CreateProject {
    fn check(&self) -> FieldErrors {
        validate_project_form(self)
    }
}

impl FormCheck for UpdateProject {
    fn check(&self) -> FieldErrors {
        check_project(ProjectFields {
            name: &self.name,
            client_id: self.client_id,
            start_date: self.start_date,
            end_date: self.end_date,
            budget: self.budget,
            spent: self.spent,
        })
    }
}

impl FormCheck for CreatePerson {
    fn check(&self) -> FieldErrors {
        validate_person_form(self)
    }
}
