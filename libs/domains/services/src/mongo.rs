use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Document, doc};
use uuid::Uuid;

use database::mongodb::ConnectionManager;

use crate::error::ServiceResult;
use crate::models::{CreateService, ServiceFilter, ServiceOffering, UpdateService};
use crate::repository::ServiceRepository;

/// MongoDB-backed implementation of ServiceRepository
#[derive(Clone)]
pub struct MongoServiceRepository {
    manager: ConnectionManager,
}

impl MongoServiceRepository {
    pub const COLLECTION: &'static str = "services";

    pub fn new(manager: ConnectionManager) -> Self {
        Self { manager }
    }

    async fn collection(&self) -> ServiceResult<Collection<ServiceOffering>> {
        Ok(self.manager.database().await?.collection(Self::COLLECTION))
    }

    fn filter_document(filter: &ServiceFilter) -> Document {
        let mut document = doc! {};
        if let Some(active) = filter.active {
            document.insert("active", active);
        }
        document
    }
}

#[async_trait]
impl ServiceRepository for MongoServiceRepository {
    async fn create(&self, input: CreateService) -> ServiceResult<ServiceOffering> {
        let service = ServiceOffering::new(input);
        self.collection().await?.insert_one(&service).await?;

        tracing::info!(service_id = %service.id, "Created service offering");
        Ok(service)
    }

    async fn get_by_id(&self, id: Uuid) -> ServiceResult<Option<ServiceOffering>> {
        let found = self
            .collection()
            .await?
            .find_one(doc! { "_id": id.to_string() })
            .await?;
        Ok(found)
    }

    async fn list(&self, filter: ServiceFilter) -> ServiceResult<Vec<ServiceOffering>> {
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

    async fn update(
        &self,
        id: Uuid,
        input: UpdateService,
    ) -> ServiceResult<Option<ServiceOffering>> {
        let collection = self.collection().await?;

        let Some(mut service) = collection.find_one(doc! { "_id": id.to_string() }).await? else {
            return Ok(None);
        };

        service.apply_update(input);
        collection
            .replace_one(doc! { "_id": id.to_string() }, &service)
            .await?;

        tracing::info!(service_id = %id, "Updated service offering");
        Ok(Some(service))
    }

    async fn delete(&self, id: Uuid) -> ServiceResult<bool> {
        let result = self
            .collection()
            .await?
            .delete_one(doc! { "_id": id.to_string() })
            .await?;

        if result.deleted_count > 0 {
            tracing::info!(service_id = %id, "Deleted service offering");
        }
        Ok(result.deleted_count > 0)
    }
}
