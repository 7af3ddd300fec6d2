use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Document, doc};
use uuid::Uuid;

use database::mongodb::ConnectionManager;

use crate::error::BlogResult;
use crate::models::{Blog, BlogFilter, CreateBlog, UpdateBlog};
use crate::repository::BlogRepository;

/// MongoDB-backed implementation of BlogRepository
///
/// Resolves the collection through the connection manager on every call, so a
/// re-established handle is picked up transparently and the fail-fast
/// accessor semantics apply when command buffering is disabled.
#[derive(Clone)]
pub struct MongoBlogRepository {
    manager: ConnectionManager,
}

impl MongoBlogRepository {
    pub const COLLECTION: &'static str = "blogs";

    pub fn new(manager: ConnectionManager) -> Self {
        Self { manager }
    }

    async fn collection(&self) -> BlogResult<Collection<Blog>> {
        Ok(self.manager.database().await?.collection(Self::COLLECTION))
    }

    fn filter_document(filter: &BlogFilter) -> Document {
        let mut document = doc! {};
        if let Some(ref author) = filter.author {
            document.insert("author", author.as_str());
        }
        if let Some(published) = filter.published {
            document.insert("published", published);
        }
        if let Some(ref tag) = filter.tag {
            // equality against an array field matches any element
            document.insert("tags", tag.as_str());
        }
        document
    }
}

#[async_trait]
impl BlogRepository for MongoBlogRepository {
    async fn create(&self, input: CreateBlog) -> BlogResult<Blog> {
        let blog = Blog::new(input);
        self.collection().await?.insert_one(&blog).await?;

        tracing::info!(blog_id = %blog.id, "Created blog post");
        Ok(blog)
    }

    async fn get_by_id(&self, id: Uuid) -> BlogResult<Option<Blog>> {
        let found = self
            .collection()
            .await?
            .find_one(doc! { "_id": id.to_string() })
            .await?;
        Ok(found)
    }

    async fn list(&self, filter: BlogFilter) -> BlogResult<Vec<Blog>> {
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

    async fn update(&self, id: Uuid, input: UpdateBlog) -> BlogResult<Option<Blog>> {
        let collection = self.collection().await?;

        let Some(mut blog) = collection.find_one(doc! { "_id": id.to_string() }).await? else {
            return Ok(None);
        };

        blog.apply_update(input);
        collection
            .replace_one(doc! { "_id": id.to_string() }, &blog)
            .await?;

        tracing::info!(blog_id = %id, "Updated blog post");
        Ok(Some(blog))
    }

    async fn delete(&self, id: Uuid) -> BlogResult<bool> {
        let result = self
            .collection()
            .await?
            .delete_one(doc! { "_id": id.to_string() })
            .await?;

        if result.deleted_count > 0 {
            tracing::info!(blog_id = %id, "Deleted blog post");
        }
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::mongodb::MongoConfig;

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_create_get_delete_cycle() {
        let url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let manager = ConnectionManager::new(MongoConfig::with_database(url, "atelier_test"));
        let repo = MongoBlogRepository::new(manager);

        let blog = repo
            .create(CreateBlog {
                title: "Integration".to_string(),
                author: "jo".to_string(),
                summary: String::new(),
                content: "body".to_string(),
                tags: vec![],
                published: true,
            })
            .await
            .unwrap();

        let fetched = repo.get_by_id(blog.id).await.unwrap();
        assert_eq!(fetched.unwrap().title, "Integration");

        assert!(repo.delete(blog.id).await.unwrap());
        assert!(repo.get_by_id(blog.id).await.unwrap().is_none());
    }
}
