use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Portfolio project entity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Project name
    pub name: String,
    /// What the project is and does
    pub description: String,
    /// Technologies used, for filtering and display
    pub tech_stack: Vec<String>,
    /// Source repository, if public
    pub repo_url: Option<String>,
    /// Live deployment, if any
    pub live_url: Option<String>,
    /// Featured projects are surfaced on the landing page
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new project
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProject {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[validate(url)]
    pub repo_url: Option<String>,
    #[validate(url)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// DTO for updating an existing project
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProject {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    #[validate(url)]
    pub repo_url: Option<String>,
    #[validate(url)]
    pub live_url: Option<String>,
    pub featured: Option<bool>,
}

/// Query filters for listing projects
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct ProjectFilter {
    pub featured: Option<bool>,
    /// Matches projects whose stack contains this technology
    pub tech: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

fn default_limit() -> usize {
    50
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            featured: None,
            tech: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

impl Project {
    pub fn new(input: CreateProject) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            tech_stack: input.tech_stack,
            repo_url: input.repo_url,
            live_url: input.live_url,
            featured: input.featured,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, update: UpdateProject) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(tech_stack) = update.tech_stack {
            self.tech_stack = tech_stack;
        }
        if let Some(repo_url) = update.repo_url {
            self.repo_url = Some(repo_url);
        }
        if let Some(live_url) = update.live_url {
            self.live_url = Some(live_url);
        }
        if let Some(featured) = update.featured {
            self.featured = featured;
        }
        self.updated_at = Utc::now();
    }
}
