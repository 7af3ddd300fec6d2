use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ProjectResult;
use crate::models::{CreateProject, Project, ProjectFilter, UpdateProject};

/// Repository trait for project persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, input: CreateProject) -> ProjectResult<Project>;

    async fn get_by_id(&self, id: Uuid) -> ProjectResult<Option<Project>>;

    async fn list(&self, filter: ProjectFilter) -> ProjectResult<Vec<Project>>;

    async fn update(&self, id: Uuid, input: UpdateProject) -> ProjectResult<Option<Project>>;

    async fn delete(&self, id: Uuid) -> ProjectResult<bool>;
}

/// In-memory implementation of ProjectRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<HashMap<Uuid, Project>>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn create(&self, input: CreateProject) -> ProjectResult<Project> {
        let mut projects = self.projects.write().await;
        let project = Project::new(input);
        projects.insert(project.id, project.clone());

        tracing::info!(project_id = %project.id, "Created project");
        Ok(project)
    }

    async fn get_by_id(&self, id: Uuid) -> ProjectResult<Option<Project>> {
        let projects = self.projects.read().await;
        Ok(projects.get(&id).cloned())
    }

    async fn list(&self, filter: ProjectFilter) -> ProjectResult<Vec<Project>> {
        let projects = self.projects.read().await;

        let mut result: Vec<Project> = projects
            .values()
            .filter(|p| {
                if let Some(featured) = filter.featured {
                    if p.featured != featured {
                        return false;
                    }
                }
                if let Some(ref tech) = filter.tech {
                    if !p.tech_stack.contains(tech) {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(result
            .into_iter()
            .skip(filter.offset)
            .take(filter.limit)
            .collect())
    }

    async fn update(&self, id: Uuid, input: UpdateProject) -> ProjectResult<Option<Project>> {
        let mut projects = self.projects.write().await;

        match projects.get_mut(&id) {
            Some(project) => {
                project.apply_update(input);
                tracing::info!(project_id = %id, "Updated project");
                Ok(Some(project.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> ProjectResult<bool> {
        let mut projects = self.projects.write().await;

        if projects.remove(&id).is_some() {
            tracing::info!(project_id = %id, "Deleted project");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input(name: &str, featured: bool) -> CreateProject {
        CreateProject {
            name: name.to_string(),
            description: String::new(),
            tech_stack: vec!["rust".to_string(), "axum".to_string()],
            repo_url: None,
            live_url: None,
            featured,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_project() {
        let repo = InMemoryProjectRepository::new();

        let project = repo.create(sample_input("atelier", false)).await.unwrap();
        assert_eq!(project.name, "atelier");

        let fetched = repo.get_by_id(project.id).await.unwrap();
        assert_eq!(fetched.unwrap().id, project.id);
    }

    #[tokio::test]
    async fn test_list_filters_featured_and_tech() {
        let repo = InMemoryProjectRepository::new();
        repo.create(sample_input("showcase", true)).await.unwrap();
        repo.create(sample_input("internal", false)).await.unwrap();

        let featured = repo
            .list(ProjectFilter {
                featured: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].name, "showcase");

        let by_tech = repo
            .list(ProjectFilter {
                tech: Some("axum".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_tech.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_missing_project_returns_false() {
        let repo = InMemoryProjectRepository::new();
        assert!(!repo.delete(Uuid::now_v7()).await.unwrap());
    }
}
