//! REST client for the CRM `/api` endpoints.
//!
//! One method per operation, generic over the [`Resource`] being addressed:
//!
//! ```ignore
//! let api = CrmApi::new(DEFAULT_API_URL.to_string());
//! let clients = api.list::<Clients>().await?;
//! ```

use crm_core::types::DbId;
use crm_db::models::client::{Client, CreateClient, UpdateClient};
use crm_db::models::person::{CreatePerson, Person, UpdatePerson};
use crm_db::models::project::{CreateProject, Project, UpdateProject};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::filter::Record;
use crate::form::FormCheck;

/// Base URL of a locally running API server.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// One CRUD endpoint group and the payloads it exchanges.
pub trait Resource {
    /// Path segment under the API base, e.g. `/clients`.
    const PATH: &'static str;
    /// Row type returned by reads and writes.
    type Item: DeserializeOwned + Record;
    /// POST body.
    type Create: Serialize + FormCheck;
    /// PUT body.
    type Update: Serialize + FormCheck;
}

/// `/clients`
pub struct Clients;

/// `/projects`
pub struct Projects;

/// `/people`
pub struct People;

impl Resource for Clients {
    const PATH: &'static str = "/clients";
    type Item = Client;
    type Create = CreateClient;
    type Update = UpdateClient;
}

impl Resource for Projects {
    const PATH: &'static str = "/projects";
    type Item = Project;
    type Create = CreateProject;
    type Update = UpdateProject;
}

impl Resource for People {
    const PATH: &'static str = "/people";
    type Item = Person;
    type Create = CreatePerson;
    type Update = UpdatePerson;
}

/// Returned by [`CrmApi::delete`] on any 2xx; the body is never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deleted;

/// HTTP client for one CRM API server.
#[derive(Debug, Clone)]
pub struct CrmApi {
    client: reqwest::Client,
    base_url: String,
}

impl Default for CrmApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL.to_string())
    }
}

impl CrmApi {
    /// * `base_url` - API root including `/api`, without a trailing slash.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {PATH}`
    pub async fn list<R: Resource>(&self) -> Result<Vec<R::Item>, ApiError> {
        let response = self.request(Method::GET, self.collection_url::<R>()).send().await?;
        Self::parse_response(response).await
    }

    /// `GET {PATH}/{id}`
    pub async fn get<R: Resource>(&self, id: DbId) -> Result<R::Item, ApiError> {
        let response = self.request(Method::GET, self.item_url::<R>(id)).send().await?;
        Self::parse_response(response).await
    }

    /// `POST {PATH}`
    pub async fn create<R: Resource>(&self, input: &R::Create) -> Result<R::Item, ApiError> {
        let response = self
            .request(Method::POST, self.collection_url::<R>())
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `PUT {PATH}/{id}` with the full field set.
    pub async fn update<R: Resource>(
        &self,
        id: DbId,
        input: &R::Update,
    ) -> Result<R::Item, ApiError> {
        let response = self
            .request(Method::PUT, self.item_url::<R>(id))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `DELETE {PATH}/{id}`
    ///
    /// The server may answer with a JSON confirmation or an empty body;
    /// either way only the status is inspected.
    pub async fn delete<R: Resource>(&self, id: DbId) -> Result<Deleted, ApiError> {
        let response = self.request(Method::DELETE, self.item_url::<R>(id)).send().await?;
        Self::ensure_success(response)?;
        Ok(Deleted)
    }

    // ---- private helpers ----

    /// Every request is sent as JSON, bodiless GET and DELETE included.
    fn request(&self, method: Method, url: String) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
    }

    fn collection_url<R: Resource>(&self) -> String {
        format!("{}{}", self.base_url, R::PATH)
    }

    fn item_url<R: Resource>(&self, id: DbId) -> String {
        format!("{}{}/{id}", self.base_url, R::PATH)
    }

    /// Map a non-2xx status to [`ApiError::Status`] carrying its reason phrase.
    fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response)?;
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_and_resource_path() {
        let api = CrmApi::new("http://host:5000/api".to_string());
        assert_eq!(api.collection_url::<Clients>(), "http://host:5000/api/clients");
        assert_eq!(api.item_url::<Projects>(7), "http://host:5000/api/projects/7");
        assert_eq!(api.item_url::<People>(3), "http://host:5000/api/people/3");
    }

    #[test]
    fn default_points_at_local_server() {
        assert_eq!(CrmApi::default().base_url(), DEFAULT_API_URL);
    }
}
