use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::modules::parent::schema::ParentProfileEntity;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateParentProfile {
    #[validate(length(min = 1, max = 200, message = "Parent name must be 1 to 200 characters long"))]
    pub parent_name: String,
    pub user_id: Uuid,
    pub profile_image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ParentProfileResponse {
    pub id: Uuid,
    pub parent_name: String,
    pub user_id: Uuid,
    pub profile_image: String,
    pub url: &'static str,
}

impl From<ParentProfileEntity> for ParentProfileResponse {
    fn from(entity: ParentProfileEntity) -> Self {
        let url = entity.absolute_url();
        ParentProfileResponse {
            id: entity.id,
            parent_name: entity.parent_name,
            user_id: entity.user_id,
            profile_image: entity.profile_image,
            url,
        }
    }
}
