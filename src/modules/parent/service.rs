use log::info;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::error;
use crate::modules::parent::{
    model::{CreateParentProfile, ParentProfileResponse},
    repository::ParentRepository,
};

#[derive(Clone)]
pub struct ParentService {
    repo: Arc<dyn ParentRepository + Send + Sync>,
}

impl ParentService {
    pub fn with_dependencies(repo: Arc<dyn ParentRepository + Send + Sync>) -> Self {
        info!("ParentService initialized with dependencies");
        ParentService { repo }
    }

    pub async fn create(
        &self,
        profile: CreateParentProfile,
    ) -> Result<ParentProfileResponse, error::SystemError> {
        let entity = self.repo.create(&profile).await?;
        info!("Parent profile {} created for user {}", entity.id, entity.user_id);
        Ok(entity.into())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ParentProfileResponse, error::SystemError> {
        self.repo
            .find_by_id(&id)
            .await?
            .map(ParentProfileResponse::from)
            .ok_or_else(|| error::SystemError::not_found("Parent profile not found"))
    }

    pub async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<ParentProfileResponse>, error::SystemError> {
        let profiles = self.repo.find_by_user(&user_id).await?;
        Ok(profiles.into_iter().map(ParentProfileResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PLACEHOLDER_IMAGE;
    use crate::modules::parent::schema::ParentProfileEntity;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryParents {
        rows: Mutex<Vec<ParentProfileEntity>>,
    }

    #[async_trait::async_trait]
    impl ParentRepository for InMemoryParents {
        async fn find_by_id(
            &self,
            id: &Uuid,
        ) -> Result<Option<ParentProfileEntity>, error::SystemError> {
            Ok(self.rows.lock().unwrap().iter().find(|p| p.id == *id).cloned())
        }

        async fn find_by_user(
            &self,
            user_id: &Uuid,
        ) -> Result<Vec<ParentProfileEntity>, error::SystemError> {
            Ok(self.rows.lock().unwrap().iter().filter(|p| p.user_id == *user_id).cloned().collect())
        }

        async fn create(
            &self,
            profile: &CreateParentProfile,
        ) -> Result<ParentProfileEntity, error::SystemError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|p| p.parent_name == profile.parent_name) {
                return Err(error::SystemError::Conflict(None));
            }
            let entity = ParentProfileEntity {
                id: crate::utils::new_id(),
                parent_name: profile.parent_name.clone(),
                user_id: profile.user_id,
                profile_image: profile
                    .profile_image
                    .clone()
                    .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            };
            rows.push(entity.clone());
            Ok(entity)
        }
    }

    fn create(name: &str, user_id: Uuid) -> CreateParentProfile {
        CreateParentProfile { parent_name: name.to_string(), user_id, profile_image: None }
    }

    #[actix_web::test]
    async fn test_user_can_own_several_parent_profiles() {
        let service = ParentService::with_dependencies(Arc::new(InMemoryParents::default()));
        let user_id = Uuid::now_v7();

        service.create(create("Mum", user_id)).await.unwrap();
        service.create(create("Mum at work", user_id)).await.unwrap();
        service.create(create("Someone else", Uuid::now_v7())).await.unwrap();

        let profiles = service.list_for_user(user_id).await.unwrap();
        assert_eq!(profiles.len(), 2);
        assert!(profiles.iter().all(|p| p.url == "/add_child"));
        assert!(profiles.iter().all(|p| p.profile_image == PLACEHOLDER_IMAGE));
    }

    #[actix_web::test]
    async fn test_duplicate_parent_name_conflicts() {
        let service = ParentService::with_dependencies(Arc::new(InMemoryParents::default()));
        service.create(create("Mum", Uuid::now_v7())).await.unwrap();
        let err = service.create(create("Mum", Uuid::now_v7())).await.unwrap_err();
        assert!(matches!(err, error::SystemError::Conflict(_)));
    }

    #[test]
    fn test_display_is_parent_name() {
        let entity = ParentProfileEntity {
            id: Uuid::nil(),
            parent_name: "Mum".to_string(),
            user_id: Uuid::nil(),
            profile_image: PLACEHOLDER_IMAGE.to_string(),
        };
        assert_eq!(entity.to_string(), "Mum");
    }
}
