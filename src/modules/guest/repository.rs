use uuid::Uuid;

use crate::api::error;
use crate::modules::guest::{model::CreateGuestProfile, schema::GuestProfileEntity};

#[async_trait::async_trait]
pub trait GuestRepository {
    async fn find_by_id(&self, id: &Uuid)
    -> Result<Option<GuestProfileEntity>, error::SystemError>;

    async fn find_by_user(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<GuestProfileEntity>, error::SystemError>;

    async fn create(
        &self,
        profile: &CreateGuestProfile,
    ) -> Result<GuestProfileEntity, error::SystemError>;
}
