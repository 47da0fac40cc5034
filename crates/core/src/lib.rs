//! Domain rules shared by the CRM server and its client.
//!
//! Nothing in this crate performs I/O. The database, HTTP and client crates
//! all lean on the types and validation helpers defined here so that the
//! server boundary and the UI form layer agree on what a valid record is.

pub mod availability;
pub mod contact;
pub mod error;
pub mod project_status;
pub mod types;
pub mod validation;
