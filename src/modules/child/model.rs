use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::modules::child::schema::ChildProfileEntity;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateChildProfile {
    #[validate(length(min = 1, max = 200, message = "Child name must be 1 to 200 characters long"))]
    pub child_name: String,
    pub id_child: i32,
    pub parent_id: Uuid,
    pub profile_image: Option<String>,
    pub birthdate: chrono::NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct AddFriendBody {
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FriendResponse {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Serialize)]
pub struct FriendCountResponse {
    pub child_id: Uuid,
    pub friends: i64,
}

#[derive(Debug, Serialize)]
pub struct ChildProfileResponse {
    #[serde(flatten)]
    pub profile: ChildProfileEntity,
    pub url: &'static str,
}

impl From<ChildProfileEntity> for ChildProfileResponse {
    fn from(profile: ChildProfileEntity) -> Self {
        let url = profile.absolute_url();
        ChildProfileResponse { profile, url }
    }
}
