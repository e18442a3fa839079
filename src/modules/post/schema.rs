use std::fmt;

use serde::Serialize;
use sqlx::prelude::FromRow;
use uuid::Uuid;

use crate::constants::Route;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PostEntity {
    pub id: Uuid,
    pub title: String,
    pub author_id: Uuid,
    pub content: String,
    pub featured_image: String,
    pub media: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Refreshed on every save alongside `updated_at`; not a soft-delete marker.
    pub deleted_at: chrono::DateTime<chrono::Utc>,
    /// Single liking account. At most one like per post.
    pub likes_id: Option<Uuid>,
}

impl PostEntity {
    pub fn number_of_likes(&self) -> i64 {
        i64::from(self.likes_id.is_some())
    }

    pub fn absolute_url(&self) -> &'static str {
        Route::Profile.path()
    }
}

impl fmt::Display for PostEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
