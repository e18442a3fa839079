use log::info;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::error;
use crate::modules::guest::{
    model::{CreateGuestProfile, GuestProfileResponse},
    repository::GuestRepository,
};

#[derive(Clone)]
pub struct GuestService {
    repo: Arc<dyn GuestRepository + Send + Sync>,
}

impl GuestService {
    pub fn with_dependencies(repo: Arc<dyn GuestRepository + Send + Sync>) -> Self {
        info!("GuestService initialized with dependencies");
        GuestService { repo }
    }

    pub async fn create(
        &self,
        profile: CreateGuestProfile,
    ) -> Result<GuestProfileResponse, error::SystemError> {
        let entity = self.repo.create(&profile).await?;
        info!("Guest profile {} created for user {}", entity.id, entity.user_id);
        Ok(entity.into())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<GuestProfileResponse, error::SystemError> {
        self.repo
            .find_by_id(&id)
            .await?
            .map(GuestProfileResponse::from)
            .ok_or_else(|| error::SystemError::not_found("Guest profile not found"))
    }

    pub async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<GuestProfileResponse>, error::SystemError> {
        let profiles = self.repo.find_by_user(&user_id).await?;
        Ok(profiles.into_iter().map(GuestProfileResponse::from).collect())
    }
}
