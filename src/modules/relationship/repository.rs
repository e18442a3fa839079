use uuid::Uuid;

use crate::api::error;
use crate::modules::relationship::{
    model::RelationshipView,
    schema::{RelationshipEntity, RelationshipStatus},
};

#[async_trait::async_trait]
pub trait RelationshipRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<RelationshipEntity>, error::SystemError>;

    async fn create(
        &self,
        sender_id: &Uuid,
        receiver_id: &Uuid,
        status: RelationshipStatus,
    ) -> Result<RelationshipEntity, error::SystemError>;

    async fn update_status(
        &self,
        id: &Uuid,
        status: RelationshipStatus,
    ) -> Result<Option<RelationshipEntity>, error::SystemError>;

    async fn find_sent(&self, child_id: &Uuid)
    -> Result<Vec<RelationshipView>, error::SystemError>;

    async fn find_received(
        &self,
        guest_id: &Uuid,
    ) -> Result<Vec<RelationshipView>, error::SystemError>;
}
