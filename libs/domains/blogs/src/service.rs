use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{BlogError, BlogResult};
use crate::models::{Blog, BlogFilter, CreateBlog, UpdateBlog};
use crate::repository::BlogRepository;

/// Service layer for blog post business logic
#[derive(Clone)]
pub struct BlogService<R: BlogRepository> {
    repository: Arc<R>,
}

impl<R: BlogRepository> BlogService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new blog post after validating the input
    pub async fn create_blog(&self, input: CreateBlog) -> BlogResult<Blog> {
        input
            .validate()
            .map_err(|e| BlogError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a blog post by ID
    pub async fn get_blog(&self, id: Uuid) -> BlogResult<Blog> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(BlogError::NotFound(id))
    }

    /// List blog posts with filters
    pub async fn list_blogs(&self, filter: BlogFilter) -> BlogResult<Vec<Blog>> {
        self.repository.list(filter).await
    }

    /// Update a blog post
    pub async fn update_blog(&self, id: Uuid, input: UpdateBlog) -> BlogResult<Blog> {
        input
            .validate()
            .map_err(|e| BlogError::Validation(e.to_string()))?;

        self.repository
            .update(id, input)
            .await?
            .ok_or(BlogError::NotFound(id))
    }

    /// Delete a blog post
    pub async fn delete_blog(&self, id: Uuid) -> BlogResult<()> {
        if !self.repository.delete(id).await? {
            return Err(BlogError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockBlogRepository;

    #[tokio::test]
    async fn test_get_blog_maps_missing_to_not_found() {
        let mut mock_repo = MockBlogRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_get_by_id()
            .with(mockall::predicate::eq(id))
            .returning(|_| Ok(None));

        let service = BlogService::new(mock_repo);
        let result = service.get_blog(id).await;

        assert!(matches!(result, Err(BlogError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_delete_blog_maps_missing_to_not_found() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo.expect_delete().returning(|_| Ok(false));

        let service = BlogService::new(mock_repo);
        let result = service.delete_blog(Uuid::now_v7()).await;

        assert!(matches!(result, Err(BlogError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_blog_rejects_invalid_input_before_repository() {
        // no expectations set: the repository must never be reached
        let mock_repo = MockBlogRepository::new();
        let service = BlogService::new(mock_repo);

        let result = service
            .create_blog(CreateBlog {
                title: String::new(), // invalid
                author: "jo".to_string(),
                summary: String::new(),
                content: "body".to_string(),
                tags: vec![],
                published: false,
            })
            .await;

        assert!(matches!(result, Err(BlogError::Validation(_))));
    }
}
