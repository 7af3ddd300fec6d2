use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::TeamResult;
use crate::models::{CreateTeamMember, TeamFilter, TeamMember, UpdateTeamMember};

/// Repository trait for team member persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    async fn create(&self, input: CreateTeamMember) -> TeamResult<TeamMember>;

    async fn get_by_id(&self, id: Uuid) -> TeamResult<Option<TeamMember>>;

    async fn list(&self, filter: TeamFilter) -> TeamResult<Vec<TeamMember>>;

    async fn update(&self, id: Uuid, input: UpdateTeamMember) -> TeamResult<Option<TeamMember>>;

    async fn delete(&self, id: Uuid) -> TeamResult<bool>;
}

/// In-memory implementation of TeamRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryTeamRepository {
    members: Arc<RwLock<HashMap<Uuid, TeamMember>>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn create(&self, input: CreateTeamMember) -> TeamResult<TeamMember> {
        let mut members = self.members.write().await;
        let member = TeamMember::new(input);
        members.insert(member.id, member.clone());

        tracing::info!(member_id = %member.id, "Added team member");
        Ok(member)
    }

    async fn get_by_id(&self, id: Uuid) -> TeamResult<Option<TeamMember>> {
        let members = self.members.read().await;
        Ok(members.get(&id).cloned())
    }

    async fn list(&self, filter: TeamFilter) -> TeamResult<Vec<TeamMember>> {
        let members = self.members.read().await;

        let mut result: Vec<TeamMember> = members
            .values()
            .filter(|m| {
                filter
                    .role
                    .as_ref()
                    .is_none_or(|role| m.role.eq_ignore_ascii_case(role))
            })
            .cloned()
            .collect();

        // Stable listing order for the about page
        result.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(result
            .into_iter()
            .skip(filter.offset)
            .take(filter.limit)
            .collect())
    }

    async fn update(&self, id: Uuid, input: UpdateTeamMember) -> TeamResult<Option<TeamMember>> {
        let mut members = self.members.write().await;

        match members.get_mut(&id) {
            Some(member) => {
                member.apply_update(input);
                tracing::info!(member_id = %id, "Updated team member");
                Ok(Some(member.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> TeamResult<bool> {
        let mut members = self.members.write().await;

        if members.remove(&id).is_some() {
            tracing::info!(member_id = %id, "Removed team member");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input(name: &str, role: &str) -> CreateTeamMember {
        CreateTeamMember {
            name: name.to_string(),
            role: role.to_string(),
            bio: String::new(),
            avatar_url: None,
        }
    }

    #[tokio::test]
    async fn test_list_sorts_by_name_and_filters_role() {
        let repo = InMemoryTeamRepository::new();
        repo.create(sample_input("Zoe", "Engineer")).await.unwrap();
        repo.create(sample_input("Ada", "Engineer")).await.unwrap();
        repo.create(sample_input("Mel", "Designer")).await.unwrap();

        let engineers = repo
            .list(TeamFilter {
                role: Some("engineer".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(engineers.len(), 2);
        assert_eq!(engineers[0].name, "Ada");
        assert_eq!(engineers[1].name, "Zoe");
    }

    #[tokio::test]
    async fn test_update_missing_member_returns_none() {
        let repo = InMemoryTeamRepository::new();
        let result = repo
            .update(Uuid::now_v7(), UpdateTeamMember::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
