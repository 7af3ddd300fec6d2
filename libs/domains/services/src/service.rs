use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ServiceError, ServiceResult};
use crate::models::{CreateService, ServiceFilter, ServiceOffering, UpdateService};
use crate::repository::ServiceRepository;

/// Service layer for service offering business logic.
///
/// Named `OfferingService` to keep "service" unambiguous between the domain
/// entity and the application layer.
#[derive(Clone)]
pub struct OfferingService<R: ServiceRepository> {
    repository: Arc<R>,
}

impl<R: ServiceRepository> OfferingService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn create_service(&self, input: CreateService) -> ServiceResult<ServiceOffering> {
        input
            .validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    pub async fn get_service(&self, id: Uuid) -> ServiceResult<ServiceOffering> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    pub async fn list_services(&self, filter: ServiceFilter) -> ServiceResult<Vec<ServiceOffering>> {
        self.repository.list(filter).await
    }

    pub async fn update_service(
        &self,
        id: Uuid,
        input: UpdateService,
    ) -> ServiceResult<ServiceOffering> {
        input
            .validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        self.repository
            .update(id, input)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    pub async fn delete_service(&self, id: Uuid) -> ServiceResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ServiceError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockServiceRepository;

    #[tokio::test]
    async fn test_update_service_maps_missing_to_not_found() {
        let mut mock_repo = MockServiceRepository::new();
        mock_repo.expect_update().returning(|_, _| Ok(None));

        let service = OfferingService::new(mock_repo);
        let result = service
            .update_service(Uuid::now_v7(), UpdateService::default())
            .await;

        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }
}
