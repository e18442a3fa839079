use uuid::Uuid;

use crate::api::error;
use crate::modules::parent::{model::CreateParentProfile, schema::ParentProfileEntity};

#[async_trait::async_trait]
pub trait ParentRepository {
    async fn find_by_id(&self, id: &Uuid)
    -> Result<Option<ParentProfileEntity>, error::SystemError>;

    /// An account may own any number of parent profiles.
    async fn find_by_user(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<ParentProfileEntity>, error::SystemError>;

    async fn create(
        &self,
        profile: &CreateParentProfile,
    ) -> Result<ParentProfileEntity, error::SystemError>;
}
