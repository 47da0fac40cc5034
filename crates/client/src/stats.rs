//! Summary figures shown above each resource list.

use crm_core::availability::is_available;
use crm_core::project_status::ProjectStatus;
use crm_db::models::client::Client;
use crm_db::models::person::Person;
use crm_db::models::project::Project;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientStats {
    pub total: usize,
    /// Projects linked to any of the given clients.
    pub total_projects: usize,
    /// `total_projects / total`, or 0 with no clients.
    pub average_projects: f64,
}

impl ClientStats {
    pub fn compute(clients: &[Client], projects: &[Project]) -> Self {
        let total = clients.len();
        let total_projects = projects
            .iter()
            .filter(|p| {
                p.client_id
                    .is_some_and(|id| clients.iter().any(|c| c.id == id))
            })
            .count();
        let average_projects = if total == 0 {
            0.0
        } else {
            total_projects as f64 / total as f64
        };
        Self {
            total,
            total_projects,
            average_projects,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub total_budget: f64,
    pub total_spent: f64,
}

impl ProjectStats {
    pub fn compute(projects: &[Project]) -> Self {
        let count =
            |status: ProjectStatus| projects.iter().filter(|p| p.status == status).count();
        Self {
            total: projects.len(),
            active: count(ProjectStatus::Active),
            completed: count(ProjectStatus::Completed),
            total_budget: projects.iter().map(|p| p.budget).sum(),
            total_spent: projects.iter().map(|p| p.spent).sum(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeopleStats {
    pub total: usize,
    pub available: usize,
}

impl PeopleStats {
    pub fn compute(people: &[Person]) -> Self {
        Self {
            total: people.len(),
            available: people.iter().filter(|p| is_available(&p.availability)).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn client(id: i64) -> Client {
        Client {
            id,
            name: format!("Client {id}"),
            email: format!("c{id}@acme.sk"),
            phone: None,
            company: None,
            address: None,
            ico: None,
            dic: None,
            ic_dph: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn project(
        id: i64,
        client_id: Option<i64>,
        status: ProjectStatus,
        budget: f64,
        spent: f64,
    ) -> Project {
        Project {
            id,
            name: format!("Project {id}"),
            client_id,
            status,
            start_date: None,
            end_date: None,
            budget,
            spent,
            progress: status.normalize_progress(50),
            team_size: 1,
            description: None,
            technologies: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
            client_name: None,
            client_company: None,
            team_members: vec![],
        }
    }

    fn person(id: i64, availability: &str) -> Person {
        Person {
            id,
            name: format!("Person {id}"),
            skills: vec![],
            availability: availability.to_string(),
            current_project_id: None,
            rate: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            current_project_name: None,
        }
    }

    #[test]
    fn client_stats_average_over_clients() {
        let clients = vec![client(1), client(2)];
        let projects = vec![
            project(1, Some(1), ProjectStatus::Active, 0.0, 0.0),
            project(2, Some(1), ProjectStatus::Active, 0.0, 0.0),
            project(3, Some(2), ProjectStatus::Active, 0.0, 0.0),
            project(4, None, ProjectStatus::Active, 0.0, 0.0),
        ];
        let stats = ClientStats::compute(&clients, &projects);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.total_projects, 3);
        assert_eq!(stats.average_projects, 1.5);
    }

    #[test]
    fn client_stats_empty() {
        let stats = ClientStats::compute(&[], &[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_projects, 0.0);
    }

    #[test]
    fn project_stats_count_and_sum() {
        let projects = vec![
            project(1, None, ProjectStatus::Active, 1000.0, 400.0),
            project(2, None, ProjectStatus::Completed, 2000.0, 2100.0),
            project(3, None, ProjectStatus::Planning, 500.0, 0.0),
        ];
        let stats = ProjectStats::compute(&projects);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.total_budget, 3500.0);
        assert_eq!(stats.total_spent, 2500.0);
    }

    #[test]
    fn people_stats_count_both_gender_forms() {
        let people = vec![
            person(1, "Voľný"),
            person(2, "Voľná"),
            person(3, "Obsadený do 3/2025"),
        ];
        assert_eq!(
            PeopleStats::compute(&people),
            PeopleStats { total: 3, available: 2 }
        );
    }
}
