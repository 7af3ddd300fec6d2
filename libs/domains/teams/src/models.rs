use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Team member profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamMember {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    /// Job title, e.g. "Lead Engineer"
    pub role: String,
    pub bio: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for adding a team member
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTeamMember {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub role: String,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub bio: String,
    #[validate(url)]
    pub avatar_url: Option<String>,
}

/// DTO for updating a team member
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTeamMember {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub role: Option<String>,
    #[validate(length(max = 1000))]
    pub bio: Option<String>,
    #[validate(url)]
    pub avatar_url: Option<String>,
}

/// Query filters for listing team members
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct TeamFilter {
    pub role: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

fn default_limit() -> usize {
    50
}

impl Default for TeamFilter {
    fn default() -> Self {
        Self {
            role: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

impl TeamMember {
    pub fn new(input: CreateTeamMember) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            role: input.role,
            bio: input.bio,
            avatar_url: input.avatar_url,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, update: UpdateTeamMember) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(bio) = update.bio {
            self.bio = bio;
        }
        if let Some(avatar_url) = update.avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        self.updated_at = Utc::now();
    }
}
