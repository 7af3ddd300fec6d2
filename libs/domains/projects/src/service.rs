use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProjectError, ProjectResult};
use crate::models::{CreateProject, Project, ProjectFilter, UpdateProject};
use crate::repository::ProjectRepository;

/// Service layer for project business logic
#[derive(Clone)]
pub struct ProjectService<R: ProjectRepository> {
    repository: Arc<R>,
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn create_project(&self, input: CreateProject) -> ProjectResult<Project> {
        input
            .validate()
            .map_err(|e| ProjectError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    pub async fn get_project(&self, id: Uuid) -> ProjectResult<Project> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProjectError::NotFound(id))
    }

    pub async fn list_projects(&self, filter: ProjectFilter) -> ProjectResult<Vec<Project>> {
        self.repository.list(filter).await
    }

    pub async fn update_project(&self, id: Uuid, input: UpdateProject) -> ProjectResult<Project> {
        input
            .validate()
            .map_err(|e| ProjectError::Validation(e.to_string()))?;

        self.repository
            .update(id, input)
            .await?
            .ok_or(ProjectError::NotFound(id))
    }

    pub async fn delete_project(&self, id: Uuid) -> ProjectResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ProjectError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProjectRepository;

    #[tokio::test]
    async fn test_get_project_maps_missing_to_not_found() {
        let mut mock_repo = MockProjectRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_get_by_id()
            .with(mockall::predicate::eq(id))
            .returning(|_| Ok(None));

        let service = ProjectService::new(mock_repo);
        let result = service.get_project(id).await;

        assert!(matches!(result, Err(ProjectError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_create_project_rejects_invalid_url() {
        let mock_repo = MockProjectRepository::new();
        let service = ProjectService::new(mock_repo);

        let result = service
            .create_project(CreateProject {
                name: "atelier".to_string(),
                description: String::new(),
                tech_stack: vec![],
                repo_url: Some("not a url".to_string()),
                live_url: None,
                featured: false,
            })
            .await;

        assert!(matches!(result, Err(ProjectError::Validation(_))));
    }
}
