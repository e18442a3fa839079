use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::user::schema::UserEntity;

fn default_true() -> bool {
    true
}

#[derive(Deserialize, Validate)]
pub struct CreateUserModel {
    #[validate(length(min = 3, max = 150, message = "Username must be 3 to 150 characters long"))]
    pub username: String,
    #[serde(default)]
    #[validate(
        email(message = "Invalid email format"),
        length(max = 254, message = "Email must be at most 254 characters long")
    )]
    pub email: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
    #[serde(default)]
    #[validate(length(max = 150, message = "First name is too long"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(max = 150, message = "Last name is too long"))]
    pub last_name: String,
    #[serde(default = "default_true")]
    pub is_parent: bool,
    #[serde(default)]
    pub is_guest: bool,
}

pub struct InsertUser {
    pub username: String,
    pub email: String,
    pub hash_password: String,
    pub first_name: String,
    pub last_name: String,
    pub is_parent: bool,
    pub is_guest: bool,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: uuid::Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_parent: bool,
    pub is_guest: bool,
    pub is_active: bool,
    pub date_joined: chrono::DateTime<chrono::Utc>,
    pub url: String,
}

impl From<UserEntity> for UserResponse {
    fn from(entity: UserEntity) -> Self {
        let url = entity.absolute_url().to_string();
        UserResponse {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            is_parent: entity.is_parent,
            is_guest: entity.is_guest,
            is_active: entity.is_active,
            date_joined: entity.date_joined,
            url,
        }
    }
}
