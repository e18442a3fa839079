use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateComment {
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub body: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommentBody {
    pub user_id: Uuid,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CommentView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub post_id: Uuid,
    pub post_title: String,
    pub body: Option<String>,
    pub created_on: chrono::DateTime<chrono::Utc>,
    pub edited_on: chrono::DateTime<chrono::Utc>,
    pub deleted_on: chrono::DateTime<chrono::Utc>,
}

impl fmt::Display for CommentView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.post_title, self.username)
    }
}
