use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::modules::guest::schema::GuestProfileEntity;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateGuestProfile {
    #[validate(length(min = 1, max = 200, message = "Guest name must be 1 to 200 characters long"))]
    pub guest_name: String,
    pub user_id: Uuid,
    pub profile_image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GuestProfileResponse {
    pub id: Uuid,
    pub guest_name: String,
    pub user_id: Uuid,
    pub profile_image: String,
    pub url: &'static str,
}

impl From<GuestProfileEntity> for GuestProfileResponse {
    fn from(entity: GuestProfileEntity) -> Self {
        let url = entity.absolute_url();
        GuestProfileResponse {
            id: entity.id,
            guest_name: entity.guest_name,
            user_id: entity.user_id,
            profile_image: entity.profile_image,
            url,
        }
    }
}
