use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{TeamError, TeamResult};
use crate::models::{CreateTeamMember, TeamFilter, TeamMember, UpdateTeamMember};
use crate::repository::TeamRepository;

/// Service layer for team member business logic
#[derive(Clone)]
pub struct TeamService<R: TeamRepository> {
    repository: Arc<R>,
}

impl<R: TeamRepository> TeamService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn add_member(&self, input: CreateTeamMember) -> TeamResult<TeamMember> {
        input
            .validate()
            .map_err(|e| TeamError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    pub async fn get_member(&self, id: Uuid) -> TeamResult<TeamMember> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TeamError::NotFound(id))
    }

    pub async fn list_members(&self, filter: TeamFilter) -> TeamResult<Vec<TeamMember>> {
        self.repository.list(filter).await
    }

    pub async fn update_member(
        &self,
        id: Uuid,
        input: UpdateTeamMember,
    ) -> TeamResult<TeamMember> {
        input
            .validate()
            .map_err(|e| TeamError::Validation(e.to_string()))?;

        self.repository
            .update(id, input)
            .await?
            .ok_or(TeamError::NotFound(id))
    }

    pub async fn remove_member(&self, id: Uuid) -> TeamResult<()> {
        if !self.repository.delete(id).await? {
            return Err(TeamError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockTeamRepository;

    #[tokio::test]
    async fn test_remove_member_maps_missing_to_not_found() {
        let mut mock_repo = MockTeamRepository::new();
        mock_repo.expect_delete().returning(|_| Ok(false));

        let service = TeamService::new(mock_repo);
        let result = service.remove_member(Uuid::now_v7()).await;

        assert!(matches!(result, Err(TeamError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_add_member_rejects_invalid_avatar_url() {
        let mock_repo = MockTeamRepository::new();
        let service = TeamService::new(mock_repo);

        let result = service
            .add_member(CreateTeamMember {
                name: "Ada".to_string(),
                role: "Engineer".to_string(),
                bio: String::new(),
                avatar_url: Some("not-a-url".to_string()),
            })
            .await;

        assert!(matches!(result, Err(TeamError::Validation(_))));
    }
}
