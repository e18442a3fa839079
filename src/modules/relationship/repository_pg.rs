use uuid::Uuid;

use crate::{
    api::error,
    modules::relationship::{
        model::RelationshipView,
        repository::RelationshipRepository,
        schema::{RelationshipEntity, RelationshipStatus},
    },
    utils::new_id,
};

const VIEW_SELECT: &str = r#"
    SELECT
        r.id,
        r.sender_id,
        c.child_name AS sender_name,
        r.receiver_id,
        g.guest_name AS receiver_name,
        r.status,
        r.updated,
        r.created
    FROM relationships r
    JOIN child_profiles c ON c.id = r.sender_id
    JOIN guest_profiles g ON g.id = r.receiver_id
"#;

#[derive(Clone)]
pub struct RelationshipRepositoryPg {
    pool: sqlx::PgPool,
}

impl RelationshipRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl RelationshipRepository for RelationshipRepositoryPg {
    async fn find_by_id(
        &self,
        id: &Uuid,
    ) -> Result<Option<RelationshipEntity>, error::SystemError> {
        let relationship =
            sqlx::query_as::<_, RelationshipEntity>("SELECT * FROM relationships WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(relationship)
    }

    async fn create(
        &self,
        sender_id: &Uuid,
        receiver_id: &Uuid,
        status: RelationshipStatus,
    ) -> Result<RelationshipEntity, error::SystemError> {
        let relationship = sqlx::query_as::<_, RelationshipEntity>(
            r#"
            INSERT INTO relationships (id, sender_id, receiver_id, status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(new_id())
        .bind(sender_id)
        .bind(receiver_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(relationship)
    }

    async fn update_status(
        &self,
        id: &Uuid,
        status: RelationshipStatus,
    ) -> Result<Option<RelationshipEntity>, error::SystemError> {
        // `updated` is refreshed by the relationships_touch trigger
        let relationship = sqlx::query_as::<_, RelationshipEntity>(
            "UPDATE relationships SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(relationship)
    }

    async fn find_sent(
        &self,
        child_id: &Uuid,
    ) -> Result<Vec<RelationshipView>, error::SystemError> {
        let rows = sqlx::query_as::<_, RelationshipView>(&format!(
            "{VIEW_SELECT} WHERE r.sender_id = $1 ORDER BY r.created, r.id"
        ))
        .bind(child_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_received(
        &self,
        guest_id: &Uuid,
    ) -> Result<Vec<RelationshipView>, error::SystemError> {
        let rows = sqlx::query_as::<_, RelationshipView>(&format!(
            "{VIEW_SELECT} WHERE r.receiver_id = $1 ORDER BY r.created, r.id"
        ))
        .bind(guest_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
