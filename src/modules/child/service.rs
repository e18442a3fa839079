use log::info;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    api::error,
    modules::{
        child::{
            model::{ChildProfileResponse, CreateChildProfile, FriendResponse},
            repository::ChildRepo,
            schema::ChildProfileEntity,
        },
        user::repository::UserRepository,
    },
};

#[derive(Clone)]
pub struct ChildService<R, U>
where
    R: ChildRepo,
    U: UserRepository + Send + Sync,
{
    child_repo: Arc<R>,
    user_repo: Arc<U>,
}

impl<R, U> ChildService<R, U>
where
    R: ChildRepo,
    U: UserRepository + Send + Sync,
{
    pub fn with_dependencies(child_repo: Arc<R>, user_repo: Arc<U>) -> Self {
        info!("ChildService initialized with dependencies");
        ChildService { child_repo, user_repo }
    }

    async fn require_child(&self, child_id: &Uuid) -> Result<ChildProfileEntity, error::SystemError> {
        self.child_repo
            .find_by_id(child_id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Child profile not found"))
    }

    pub async fn create(
        &self,
        child: CreateChildProfile,
    ) -> Result<ChildProfileResponse, error::SystemError> {
        let entity = self.child_repo.create(&child).await?;
        info!("Child profile {} created under parent {}", entity.id, entity.parent_id);
        Ok(entity.into())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ChildProfileResponse, error::SystemError> {
        Ok(self.require_child(&id).await?.into())
    }

    pub async fn list_for_parent(
        &self,
        parent_id: Uuid,
    ) -> Result<Vec<ChildProfileResponse>, error::SystemError> {
        let children = self.child_repo.find_by_parent(&parent_id).await?;
        Ok(children.into_iter().map(ChildProfileResponse::from).collect())
    }

    pub async fn get_friends(
        &self,
        child_id: Uuid,
    ) -> Result<Vec<FriendResponse>, error::SystemError> {
        let (_, friends) = tokio::try_join!(
            self.require_child(&child_id),
            self.child_repo.find_friends(&child_id),
        )?;
        Ok(friends)
    }

    pub async fn get_friends_no(&self, child_id: Uuid) -> Result<i64, error::SystemError> {
        let (_, count) = tokio::try_join!(
            self.require_child(&child_id),
            self.child_repo.count_friends(&child_id),
        )?;
        Ok(count)
    }

    pub async fn add_friend(&self, child_id: Uuid, user_id: Uuid) -> Result<(), error::SystemError> {
        let (_, user) =
            tokio::try_join!(self.require_child(&child_id), self.user_repo.find_by_id(&user_id))?;

        if user.is_none() {
            return Err(error::SystemError::not_found("User not found"));
        }

        self.child_repo.add_friend(&child_id, &user_id).await?;
        info!("User {} added to friends of child {}", user_id, child_id);
        Ok(())
    }

    pub async fn remove_friend(
        &self,
        child_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), error::SystemError> {
        if !self.child_repo.remove_friend(&child_id, &user_id).await? {
            return Err(error::SystemError::not_found("Friendship not found"));
        }
        Ok(())
    }
}
