use serde::Serialize;
use sqlx::prelude::FromRow;
use uuid::Uuid;

/// `edited_on` and `deleted_on` are stamped at insert and never move.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CommentEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub body: Option<String>,
    pub created_on: chrono::DateTime<chrono::Utc>,
    pub edited_on: chrono::DateTime<chrono::Utc>,
    pub deleted_on: chrono::DateTime<chrono::Utc>,
}
