use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Blog post entity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Blog {
    /// Unique identifier (stored as the document `_id`)
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Post title
    pub title: String,
    /// URL-friendly identifier derived from the title
    pub slug: String,
    /// Display name of the author
    pub author: String,
    /// Short teaser shown in listings
    pub summary: String,
    /// Full post body (markdown)
    pub content: String,
    /// Free-form tags for filtering
    pub tags: Vec<String>,
    /// Whether the post is publicly visible
    pub published: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new blog post
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBlog {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 100))]
    pub author: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub summary: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
}

/// DTO for updating an existing blog post
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBlog {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub author: Option<String>,
    #[validate(length(max = 500))]
    pub summary: Option<String>,
    #[validate(length(min = 1))]
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
}

/// Query filters for listing blog posts
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct BlogFilter {
    pub author: Option<String>,
    pub published: Option<bool>,
    /// Matches posts carrying this tag
    pub tag: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

fn default_limit() -> usize {
    50
}

impl Default for BlogFilter {
    fn default() -> Self {
        Self {
            author: None,
            published: None,
            tag: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

/// Derive a URL-friendly slug: lowercase alphanumerics, runs of anything
/// else collapsed to single hyphens.
pub(crate) fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

impl Blog {
    /// Create a new blog post from the CreateBlog DTO
    pub fn new(input: CreateBlog) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            slug: slugify(&input.title),
            title: input.title,
            author: input.author,
            summary: input.summary,
            content: input.content,
            tags: input.tags,
            published: input.published,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from the UpdateBlog DTO. The slug follows title changes.
    pub fn apply_update(&mut self, update: UpdateBlog) {
        if let Some(title) = update.title {
            self.slug = slugify(&title);
            self.title = title;
        }
        if let Some(author) = update.author {
            self.author = author;
        }
        if let Some(summary) = update.summary {
            self.summary = summary;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(published) = update.published {
            self.published = published;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust &   MongoDB  "), "rust-mongodb");
        assert_eq!(slugify("already-slugged"), "already-slugged");
    }

    #[test]
    fn test_new_blog_derives_slug() {
        let blog = Blog::new(CreateBlog {
            title: "Shipping the Atelier API".to_string(),
            author: "jo".to_string(),
            summary: String::new(),
            content: "body".to_string(),
            tags: vec![],
            published: false,
        });

        assert_eq!(blog.slug, "shipping-the-atelier-api");
        assert!(!blog.published);
        assert_eq!(blog.created_at, blog.updated_at);
    }

    #[test]
    fn test_apply_update_refreshes_slug_and_timestamp() {
        let mut blog = Blog::new(CreateBlog {
            title: "Old Title".to_string(),
            author: "jo".to_string(),
            summary: String::new(),
            content: "body".to_string(),
            tags: vec![],
            published: false,
        });
        let created_at = blog.created_at;

        blog.apply_update(UpdateBlog {
            title: Some("New Title".to_string()),
            published: Some(true),
            ..Default::default()
        });

        assert_eq!(blog.title, "New Title");
        assert_eq!(blog.slug, "new-title");
        assert!(blog.published);
        assert_eq!(blog.created_at, created_at);
        assert!(blog.updated_at >= created_at);
    }
}
