use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ServiceResult;
use crate::models::{CreateService, ServiceFilter, ServiceOffering, UpdateService};

/// Repository trait for service offering persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn create(&self, input: CreateService) -> ServiceResult<ServiceOffering>;

    async fn get_by_id(&self, id: Uuid) -> ServiceResult<Option<ServiceOffering>>;

    async fn list(&self, filter: ServiceFilter) -> ServiceResult<Vec<ServiceOffering>>;

    async fn update(&self, id: Uuid, input: UpdateService)
    -> ServiceResult<Option<ServiceOffering>>;

    async fn delete(&self, id: Uuid) -> ServiceResult<bool>;
}

/// In-memory implementation of ServiceRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryServiceRepository {
    services: Arc<RwLock<HashMap<Uuid, ServiceOffering>>>,
}

impl InMemoryServiceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ServiceRepository for InMemoryServiceRepository {
    async fn create(&self, input: CreateService) -> ServiceResult<ServiceOffering> {
        let mut services = self.services.write().await;
        let service = ServiceOffering::new(input);
        services.insert(service.id, service.clone());

        tracing::info!(service_id = %service.id, "Created service offering");
        Ok(service)
    }

    async fn get_by_id(&self, id: Uuid) -> ServiceResult<Option<ServiceOffering>> {
        let services = self.services.read().await;
        Ok(services.get(&id).cloned())
    }

    async fn list(&self, filter: ServiceFilter) -> ServiceResult<Vec<ServiceOffering>> {
        let services = self.services.read().await;

        let mut result: Vec<ServiceOffering> = services
            .values()
            .filter(|s| filter.active.is_none_or(|active| s.active == active))
            .cloned()
            .collect();

        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(result
            .into_iter()
            .skip(filter.offset)
            .take(filter.limit)
            .collect())
    }

    async fn update(
        &self,
        id: Uuid,
        input: UpdateService,
    ) -> ServiceResult<Option<ServiceOffering>> {
        let mut services = self.services.write().await;

        match services.get_mut(&id) {
            Some(service) => {
                service.apply_update(input);
                tracing::info!(service_id = %id, "Updated service offering");
                Ok(Some(service.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> ServiceResult<bool> {
        let mut services = self.services.write().await;

        if services.remove(&id).is_some() {
            tracing::info!(service_id = %id, "Deleted service offering");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input(name: &str, active: bool) -> CreateService {
        CreateService {
            name: name.to_string(),
            description: String::new(),
            icon: None,
            active,
        }
    }

    #[tokio::test]
    async fn test_create_get_update_delete_cycle() {
        let repo = InMemoryServiceRepository::new();

        let created = repo.create(sample_input("Web Design", true)).await.unwrap();
        assert!(created.active);

        let updated = repo
            .update(
                created.id,
                UpdateService {
                    active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert!(!updated.active);

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_filters_active() {
        let repo = InMemoryServiceRepository::new();
        repo.create(sample_input("Branding", true)).await.unwrap();
        repo.create(sample_input("Legacy", false)).await.unwrap();

        let active = repo
            .list(ServiceFilter {
                active: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Branding");
    }
}
