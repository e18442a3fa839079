use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

use crate::modules::relationship::schema::RelationshipStatus;

#[derive(Debug, Deserialize)]
pub struct SendInviteBody {
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusBody {
    pub status: RelationshipStatus,
}

/// Relationship joined with the names on both ends.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RelationshipView {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub sender_name: String,
    pub receiver_id: Uuid,
    pub receiver_name: String,
    pub status: RelationshipStatus,
    pub updated: chrono::DateTime<chrono::Utc>,
    pub created: chrono::DateTime<chrono::Utc>,
}

impl fmt::Display for RelationshipView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.sender_name, self.receiver_name, self.status)
    }
}
