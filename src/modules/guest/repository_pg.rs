use uuid::Uuid;

use crate::{
    api::error,
    constants::PLACEHOLDER_IMAGE,
    modules::guest::{
        model::CreateGuestProfile, repository::GuestRepository, schema::GuestProfileEntity,
    },
    utils::new_id,
};

#[derive(Clone)]
pub struct GuestRepositoryPg {
    pool: sqlx::PgPool,
}

impl GuestRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl GuestRepository for GuestRepositoryPg {
    async fn find_by_id(
        &self,
        id: &Uuid,
    ) -> Result<Option<GuestProfileEntity>, error::SystemError> {
        let profile =
            sqlx::query_as::<_, GuestProfileEntity>("SELECT * FROM guest_profiles WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(profile)
    }

    async fn find_by_user(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<GuestProfileEntity>, error::SystemError> {
        let profiles = sqlx::query_as::<_, GuestProfileEntity>(
            "SELECT * FROM guest_profiles WHERE user_id = $1 ORDER BY guest_name",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(profiles)
    }

    async fn create(
        &self,
        profile: &CreateGuestProfile,
    ) -> Result<GuestProfileEntity, error::SystemError> {
        let profile = sqlx::query_as::<_, GuestProfileEntity>(
            r#"
            INSERT INTO guest_profiles (id, guest_name, user_id, profile_image)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(new_id())
        .bind(&profile.guest_name)
        .bind(profile.user_id)
        .bind(profile.profile_image.as_deref().unwrap_or(PLACEHOLDER_IMAGE))
        .fetch_one(&self.pool)
        .await?;
        Ok(profile)
    }
}
