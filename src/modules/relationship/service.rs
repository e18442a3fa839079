use log::info;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::error;
use crate::modules::relationship::{
    model::RelationshipView,
    repository::RelationshipRepository,
    schema::{RelationshipEntity, RelationshipStatus},
};

#[derive(Clone)]
pub struct RelationshipService {
    repo: Arc<dyn RelationshipRepository + Send + Sync>,
}

impl RelationshipService {
    pub fn with_dependencies(repo: Arc<dyn RelationshipRepository + Send + Sync>) -> Self {
        info!("RelationshipService initialized with dependencies");
        RelationshipService { repo }
    }

    /// Records a new invite from a child to a guest with status `send`.
    /// Repeated invites between the same pair each get their own row.
    pub async fn send(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
    ) -> Result<RelationshipEntity, error::SystemError> {
        let relationship =
            self.repo.create(&sender_id, &receiver_id, RelationshipStatus::Send).await?;
        info!("Invite {} sent from child {} to guest {}", relationship.id, sender_id, receiver_id);
        Ok(relationship)
    }

    /// Writes the status as given; any transition between the two values is allowed.
    pub async fn set_status(
        &self,
        id: Uuid,
        status: RelationshipStatus,
    ) -> Result<RelationshipEntity, error::SystemError> {
        self.repo
            .update_status(&id, status)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Relationship not found"))
    }

    pub async fn accept(&self, id: Uuid) -> Result<RelationshipEntity, error::SystemError> {
        let relationship = self.set_status(id, RelationshipStatus::Accepted).await?;
        info!("Invite {} accepted", id);
        Ok(relationship)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<RelationshipEntity, error::SystemError> {
        self.repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Relationship not found"))
    }

    pub async fn list_sent(
        &self,
        child_id: Uuid,
    ) -> Result<Vec<RelationshipView>, error::SystemError> {
        self.repo.find_sent(&child_id).await
    }

    pub async fn list_received(
        &self,
        guest_id: Uuid,
    ) -> Result<Vec<RelationshipView>, error::SystemError> {
        self.repo.find_received(&guest_id).await
    }
}
