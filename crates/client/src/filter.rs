//! Free-text search over a resource collection.

use crm_core::types::DbId;
use crm_db::models::client::Client;
use crm_db::models::person::Person;
use crm_db::models::project::Project;

/// An entity the client keeps in a [`Store`](crate::store::Store).
pub trait Record {
    fn id(&self) -> DbId;

    /// Text fields the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;
}

impl Record for Client {
    fn id(&self) -> DbId {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];
        fields.extend(self.company.as_deref());
        fields
    }
}

impl Record for Project {
    fn id(&self) -> DbId {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.client_name.as_deref());
        fields.extend(self.technologies.iter().map(String::as_str));
        fields
    }
}

impl Record for Person {
    fn id(&self) -> DbId {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.skills.iter().map(String::as_str));
        fields
    }
}

/// Items whose search fields contain `term`, ignoring case, in their
/// original order. An empty term matches everything.
pub fn filter_records<'a, T: Record>(items: &'a [T], term: &str) -> Vec<&'a T> {
    if term.is_empty() {
        return items.iter().collect();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
