use uuid::Uuid;

use crate::{
    api::error,
    constants::PLACEHOLDER_IMAGE,
    modules::child::{
        model::{CreateChildProfile, FriendResponse},
        repository::{ChildFriendRepository, ChildRepository},
        schema::ChildProfileEntity,
    },
    utils::new_id,
};

#[derive(Clone)]
pub struct ChildRepositoryPg {
    pool: sqlx::PgPool,
}

impl ChildRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ChildRepository for ChildRepositoryPg {
    async fn find_by_id(
        &self,
        id: &Uuid,
    ) -> Result<Option<ChildProfileEntity>, error::SystemError> {
        let child =
            sqlx::query_as::<_, ChildProfileEntity>("SELECT * FROM child_profiles WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(child)
    }

    async fn find_by_parent(
        &self,
        parent_id: &Uuid,
    ) -> Result<Vec<ChildProfileEntity>, error::SystemError> {
        let children = sqlx::query_as::<_, ChildProfileEntity>(
            "SELECT * FROM child_profiles WHERE parent_id = $1 ORDER BY birthdate, child_name",
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(children)
    }

    async fn create(
        &self,
        child: &CreateChildProfile,
    ) -> Result<ChildProfileEntity, error::SystemError> {
        let child = sqlx::query_as::<_, ChildProfileEntity>(
            r#"
            INSERT INTO child_profiles (id, child_name, id_child, parent_id, profile_image, birthdate)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(new_id())
        .bind(&child.child_name)
        .bind(child.id_child)
        .bind(child.parent_id)
        .bind(child.profile_image.as_deref().unwrap_or(PLACEHOLDER_IMAGE))
        .bind(child.birthdate)
        .fetch_one(&self.pool)
        .await?;
        Ok(child)
    }
}

#[async_trait::async_trait]
impl ChildFriendRepository for ChildRepositoryPg {
    async fn find_friends(
        &self,
        child_id: &Uuid,
    ) -> Result<Vec<FriendResponse>, error::SystemError> {
        let friends = sqlx::query_as::<_, FriendResponse>(
            r#"
            SELECT
                u.id,
                u.username,
                u.first_name,
                u.last_name
            FROM child_profile_friends f
            JOIN users u ON u.id = f.user_id
            WHERE f.child_id = $1
            ORDER BY u.username
            "#,
        )
        .bind(child_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(friends)
    }

    async fn count_friends(&self, child_id: &Uuid) -> Result<i64, error::SystemError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM child_profile_friends WHERE child_id = $1")
                .bind(child_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    async fn add_friend(&self, child_id: &Uuid, user_id: &Uuid) -> Result<(), error::SystemError> {
        sqlx::query(
            "INSERT INTO child_profile_friends (child_id, user_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(child_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove_friend(
        &self,
        child_id: &Uuid,
        user_id: &Uuid,
    ) -> Result<bool, error::SystemError> {
        let rows =
            sqlx::query("DELETE FROM child_profile_friends WHERE child_id = $1 AND user_id = $2")
                .bind(child_id)
                .bind(user_id)
                .execute(&self.pool)
                .await?
                .rows_affected();

        Ok(rows > 0)
    }
}
