use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::BlogResult;
use crate::models::{Blog, BlogFilter, CreateBlog, UpdateBlog};

/// Repository trait for blog post persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Create a new blog post
    async fn create(&self, input: CreateBlog) -> BlogResult<Blog>;

    /// Get a blog post by ID
    async fn get_by_id(&self, id: Uuid) -> BlogResult<Option<Blog>>;

    /// List blog posts with optional filters
    async fn list(&self, filter: BlogFilter) -> BlogResult<Vec<Blog>>;

    /// Update an existing blog post; `None` when it does not exist
    async fn update(&self, id: Uuid, input: UpdateBlog) -> BlogResult<Option<Blog>>;

    /// Delete a blog post by ID; `false` when it did not exist
    async fn delete(&self, id: Uuid) -> BlogResult<bool>;
}

/// In-memory implementation of BlogRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryBlogRepository {
    blogs: Arc<RwLock<HashMap<Uuid, Blog>>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn create(&self, input: CreateBlog) -> BlogResult<Blog> {
        let mut blogs = self.blogs.write().await;
        let blog = Blog::new(input);
        blogs.insert(blog.id, blog.clone());

        tracing::info!(blog_id = %blog.id, "Created blog post");
        Ok(blog)
    }

    async fn get_by_id(&self, id: Uuid) -> BlogResult<Option<Blog>> {
        let blogs = self.blogs.read().await;
        Ok(blogs.get(&id).cloned())
    }

    async fn list(&self, filter: BlogFilter) -> BlogResult<Vec<Blog>> {
        let blogs = self.blogs.read().await;

        let mut result: Vec<Blog> = blogs
            .values()
            .filter(|b| {
                if let Some(ref author) = filter.author {
                    if &b.author != author {
                        return false;
                    }
                }
                if let Some(published) = filter.published {
                    if b.published != published {
                        return false;
                    }
                }
                if let Some(ref tag) = filter.tag {
                    if !b.tags.contains(tag) {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        // Newest first
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(result
            .into_iter()
            .skip(filter.offset)
            .take(filter.limit)
            .collect())
    }

    async fn update(&self, id: Uuid, input: UpdateBlog) -> BlogResult<Option<Blog>> {
        let mut blogs = self.blogs.write().await;

        match blogs.get_mut(&id) {
            Some(blog) => {
                blog.apply_update(input);
                tracing::info!(blog_id = %id, "Updated blog post");
                Ok(Some(blog.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> BlogResult<bool> {
        let mut blogs = self.blogs.write().await;

        if blogs.remove(&id).is_some() {
            tracing::info!(blog_id = %id, "Deleted blog post");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input(title: &str, author: &str) -> CreateBlog {
        CreateBlog {
            title: title.to_string(),
            author: author.to_string(),
            summary: String::new(),
            content: "body".to_string(),
            tags: vec!["rust".to_string()],
            published: false,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_blog() {
        let repo = InMemoryBlogRepository::new();

        let blog = repo.create(sample_input("First Post", "jo")).await.unwrap();
        assert_eq!(blog.title, "First Post");

        let fetched = repo.get_by_id(blog.id).await.unwrap();
        assert_eq!(fetched.unwrap().id, blog.id);
    }

    #[tokio::test]
    async fn test_list_filters_by_author_and_tag() {
        let repo = InMemoryBlogRepository::new();
        repo.create(sample_input("A", "jo")).await.unwrap();
        repo.create(sample_input("B", "sam")).await.unwrap();

        let by_author = repo
            .list(BlogFilter {
                author: Some("jo".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_author.len(), 1);
        assert_eq!(by_author[0].title, "A");

        let by_tag = repo
            .list(BlogFilter {
                tag: Some("rust".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_tag.len(), 2);

        let no_match = repo
            .list(BlogFilter {
                tag: Some("go".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(no_match.is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_blog_returns_none() {
        let repo = InMemoryBlogRepository::new();
        let result = repo
            .update(Uuid::now_v7(), UpdateBlog::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_returns_whether_existed() {
        let repo = InMemoryBlogRepository::new();
        let blog = repo.create(sample_input("Gone Soon", "jo")).await.unwrap();

        assert!(repo.delete(blog.id).await.unwrap());
        assert!(!repo.delete(blog.id).await.unwrap());
    }
}
