//! Request handlers, one submodule per resource.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, delete). Handlers run exactly one repository call against
//! `crm_db` and map errors via [`crate::error::AppError`].

pub mod client;
pub mod person;
pub mod project;
