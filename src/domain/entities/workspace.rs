use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named, user-owned collection of documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    id: i64,
    user_id: i64,
    title: String,
    created_at: DateTime<Utc>,
}

impl Workspace {
    pub fn restore(id: i64, user_id: i64, title: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            title,
            created_at,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkspace {
    pub title: String,
    pub user_id: i64,
}

impl NewWorkspace {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Workspace title cannot be empty".to_string());
        }

        if self.user_id <= 0 {
            return Err("Workspace must belong to a user".to_string());
        }

        Ok(())
    }

    pub fn into_workspace(self, id: i64, created_at: DateTime<Utc>) -> Workspace {
        Workspace::restore(id, self.user_id, self.title, created_at)
    }
}
