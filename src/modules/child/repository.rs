use uuid::Uuid;

use crate::api::error;
use crate::modules::child::{
    model::{CreateChildProfile, FriendResponse},
    schema::ChildProfileEntity,
};

#[async_trait::async_trait]
pub trait ChildRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<ChildProfileEntity>, error::SystemError>;

    async fn find_by_parent(
        &self,
        parent_id: &Uuid,
    ) -> Result<Vec<ChildProfileEntity>, error::SystemError>;

    async fn create(
        &self,
        child: &CreateChildProfile,
    ) -> Result<ChildProfileEntity, error::SystemError>;
}

#[async_trait::async_trait]
pub trait ChildFriendRepository {
    async fn find_friends(&self, child_id: &Uuid)
    -> Result<Vec<FriendResponse>, error::SystemError>;

    async fn count_friends(&self, child_id: &Uuid) -> Result<i64, error::SystemError>;

    /// Adding an existing friend is a no-op.
    async fn add_friend(&self, child_id: &Uuid, user_id: &Uuid) -> Result<(), error::SystemError>;

    async fn remove_friend(
        &self,
        child_id: &Uuid,
        user_id: &Uuid,
    ) -> Result<bool, error::SystemError>;
}

pub trait ChildRepo: ChildRepository + ChildFriendRepository + Send + Sync {}

impl<T> ChildRepo for T where T: ChildRepository + ChildFriendRepository + Send + Sync {}
