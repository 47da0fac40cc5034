//! Client entity model and DTOs.

use crm_core::contact::validate_email;
use crm_core::error::CoreError;
use crm_core::types::{DbId, Timestamp};
use crm_core::validation::{require_non_blank, ValidateInput};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `clients` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    /// Company registration number (IČO).
    pub ico: Option<String>,
    /// Tax identification number (DIČ).
    pub dic: Option<String>,
    /// VAT identification number (IČ DPH).
    pub ic_dph: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a client. Only `name` and `email` are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateClient {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub ico: Option<String>,
    pub dic: Option<String>,
    pub ic_dph: Option<String>,
}

/// PUT replaces the whole row, so an update carries the same fields as a create.
/// Omitted optional fields are cleared.
pub type UpdateClient = CreateClient;

impl ValidateInput for CreateClient {
    fn validate(&self) -> Result<(), CoreError> {
        require_non_blank(&self.name, "name")?;
        validate_email(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str) -> CreateClient {
        CreateClient {
            name: name.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_client_passes() {
        assert!(input("Acme", "a@acme.sk").validate().is_ok());
    }

    #[test]
    fn blank_name_rejected() {
        assert!(input("  ", "a@acme.sk").validate().is_err());
    }

    #[test]
    fn bad_email_rejected() {
        assert!(input("Acme", "acme.sk").validate().is_err());
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let parsed: CreateClient =
            serde_json::from_str(r#"{"name":"Acme","email":"a@acme.sk"}"#).unwrap();
        assert_eq!(parsed.phone, None);
        assert_eq!(parsed.ic_dph, None);
    }
}
