use log::info;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::error;
use crate::modules::user::model::{CreateUserModel, InsertUser, UserResponse};
use crate::modules::user::repository::UserRepository;
use crate::utils::hash_password;

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository + Send + Sync>,
}

impl UserService {
    pub fn with_dependencies(repo: Arc<dyn UserRepository + Send + Sync>) -> Self {
        info!("UserService initialized with dependencies");
        UserService { repo }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<UserResponse, error::SystemError> {
        self.repo
            .find_by_id(&id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| error::SystemError::not_found("User not found"))
    }

    pub async fn create_user(
        &self,
        user: CreateUserModel,
    ) -> Result<UserResponse, error::SystemError> {
        let hash_password = hash_password(&user.password)?;

        let new_user = InsertUser {
            username: user.username,
            email: user.email.unwrap_or_default(),
            hash_password,
            first_name: user.first_name,
            last_name: user.last_name,
            is_parent: user.is_parent,
            is_guest: user.is_guest,
        };

        let entity = self.repo.create(&new_user).await?;
        info!("User {} created", entity.id);
        Ok(UserResponse::from(entity))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), error::SystemError> {
        if !self.repo.delete(&id).await? {
            return Err(error::SystemError::not_found("User not found"));
        }
        info!("User {} deleted with dependent records", id);
        Ok(())
    }
}
