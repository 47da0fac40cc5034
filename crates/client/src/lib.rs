//! Client-side access to the CRM HTTP API.
//!
//! [`api::CrmApi`] issues one request per (resource, operation);
//! [`store::Store`] holds the last-known-good collection for one resource;
//! [`sync`] ties the two together the way a UI action does.

pub mod api;
pub mod error;
pub mod filter;
pub mod form;
pub mod stats;
pub mod store;
pub mod sync;
