use uuid::Uuid;

use crate::{
    api::error,
    constants::PLACEHOLDER_IMAGE,
    modules::parent::{
        model::CreateParentProfile, repository::ParentRepository, schema::ParentProfileEntity,
    },
    utils::new_id,
};

#[derive(Clone)]
pub struct ParentRepositoryPg {
    pool: sqlx::PgPool,
}

impl ParentRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ParentRepository for ParentRepositoryPg {
    async fn find_by_id(
        &self,
        id: &Uuid,
    ) -> Result<Option<ParentProfileEntity>, error::SystemError> {
        let profile =
            sqlx::query_as::<_, ParentProfileEntity>("SELECT * FROM parent_profiles WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(profile)
    }

    async fn find_by_user(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<ParentProfileEntity>, error::SystemError> {
        let profiles = sqlx::query_as::<_, ParentProfileEntity>(
            "SELECT * FROM parent_profiles WHERE user_id = $1 ORDER BY parent_name",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(profiles)
    }

    async fn create(
        &self,
        profile: &CreateParentProfile,
    ) -> Result<ParentProfileEntity, error::SystemError> {
        let profile = sqlx::query_as::<_, ParentProfileEntity>(
            r#"
            INSERT INTO parent_profiles (id, parent_name, user_id, profile_image)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(new_id())
        .bind(&profile.parent_name)
        .bind(profile.user_id)
        .bind(profile.profile_image.as_deref().unwrap_or(PLACEHOLDER_IMAGE))
        .fetch_one(&self.pool)
        .await?;
        Ok(profile)
    }
}
