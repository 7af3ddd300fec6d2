use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Document, doc};
use uuid::Uuid;

use database::mongodb::ConnectionManager;

use crate::error::TeamResult;
use crate::models::{CreateTeamMember, TeamFilter, TeamMember, UpdateTeamMember};
use crate::repository::TeamRepository;

/// MongoDB-backed implementation of TeamRepository
#[derive(Clone)]
pub struct MongoTeamRepository {
    manager: ConnectionManager,
}

impl MongoTeamRepository {
    pub const COLLECTION: &'static str = "teams";

    pub fn new(manager: ConnectionManager) -> Self {
        Self { manager }
    }

    async fn collection(&self) -> TeamResult<Collection<TeamMember>> {
        Ok(self.manager.database().await?.collection(Self::COLLECTION))
    }

    fn filter_document(filter: &TeamFilter) -> Document {
        let mut document = doc! {};
        if let Some(ref role) = filter.role {
            document.insert("role", role.as_str());
        }
        document
    }
}

#[async_trait]
impl TeamRepository for MongoTeamRepository {
    async fn create(&self, input: CreateTeamMember) -> TeamResult<TeamMember> {
        let member = TeamMember::new(input);
        self.collection().await?.insert_one(&member).await?;

        tracing::info!(member_id = %member.id, "Added team member");
        Ok(member)
    }

    async fn get_by_id(&self, id: Uuid) -> TeamResult<Option<TeamMember>> {
        let found = self
            .collection()
            .await?
            .find_one(doc! { "_id": id.to_string() })
            .await?;
        Ok(found)
    }

    async fn list(&self, filter: TeamFilter) -> TeamResult<Vec<TeamMember>> {
        let cursor = self
            .collection()
            .await?
            .find(Self::filter_document(&filter))
            .sort(doc! { "name": 1 })
            .skip(filter.offset as u64)
            .limit(filter.limit as i64)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn update(&self, id: Uuid, input: UpdateTeamMember) -> TeamResult<Option<TeamMember>> {
        let collection = self.collection().await?;

        let Some(mut member) = collection.find_one(doc! { "_id": id.to_string() }).await? else {
            return Ok(None);
        };

        member.apply_update(input);
        collection
            .replace_one(doc! { "_id": id.to_string() }, &member)
            .await?;

        tracing::info!(member_id = %id, "Updated team member");
        Ok(Some(member))
    }

    async fn delete(&self, id: Uuid) -> TeamResult<bool> {
        let result = self
            .collection()
            .await?
            .delete_one(doc! { "_id": id.to_string() })
            .await?;

        if result.deleted_count > 0 {
            tracing::info!(member_id = %id, "Removed team member");
        }
        Ok(result.deleted_count > 0)
    }
}
