use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Document, doc};
use uuid::Uuid;

use database::mongodb::ConnectionManager;

use crate::error::ProjectResult;
use crate::models::{CreateProject, Project, ProjectFilter, UpdateProject};
use crate::repository::ProjectRepository;

/// MongoDB-backed implementation of ProjectRepository
#[derive(Clone)]
pub struct MongoProjectRepository {
    manager: ConnectionManager,
}

impl MongoProjectRepository {
    pub const COLLECTION: &'static str = "projects";

    pub fn new(manager: ConnectionManager) -> Self {
        Self { manager }
    }

    async fn collection(&self) -> ProjectResult<Collection<Project>> {
        Ok(self.manager.database().await?.collection(Self::COLLECTION))
    }

    fn filter_document(filter: &ProjectFilter) -> Document {
        let mut document = doc! {};
        if let Some(featured) = filter.featured {
            document.insert("featured", featured);
        }
        if let Some(ref tech) = filter.tech {
            document.insert("tech_stack", tech.as_str());
        }
        document
    }
}

#[async_trait]
impl ProjectRepository for MongoProjectRepository {
    async fn create(&self, input: CreateProject) -> ProjectResult<Project> {
        let project = Project::new(input);
        self.collection().await?.insert_one(&project).await?;

        tracing::info!(project_id = %project.id, "Created project");
        Ok(project)
    }

    async fn get_by_id(&self, id: Uuid) -> ProjectResult<Option<Project>> {
        let found = self
            .collection()
            .await?
            .find_one(doc! { "_id": id.to_string() })
            .await?;
        Ok(found)
    }

    async fn list(&self, filter: ProjectFilter) -> ProjectResult<Vec<Project>> {
        let cursor = self
            .collection()
            .await?
            .find(Self::filter_document(&filter))
            .sort(doc! { "created_at": -1 })
            .skip(filter.offset as u64)
            .limit(filter.limit as i64)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn update(&self, id: Uuid, input: UpdateProject) -> ProjectResult<Option<Project>> {
        let collection = self.collection().await?;

        let Some(mut project) = collection.find_one(doc! { "_id": id.to_string() }).await? else {
            return Ok(None);
        };

        project.apply_update(input);
        collection
            .replace_one(doc! { "_id": id.to_string() }, &project)
            .await?;

        tracing::info!(project_id = %id, "Updated project");
        Ok(Some(project))
    }

    async fn delete(&self, id: Uuid) -> ProjectResult<bool> {
        let result = self
            .collection()
            .await?
            .delete_one(doc! { "_id": id.to_string() })
            .await?;

        if result.deleted_count > 0 {
            tracing::info!(project_id = %id, "Deleted project");
        }
        Ok(result.deleted_count > 0)
    }
}
