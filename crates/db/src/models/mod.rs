//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the (possibly joined) database row
//! - A `Deserialize` create DTO for inserts
//! - An update DTO carrying the full field set for PUT replacement
//!
//! Rows and DTOs derive both `Serialize` and `Deserialize` so the HTTP
//! client can reuse them as its wire types.

pub mod assignment;
pub mod client;
pub mod person;
pub mod project;
