use uuid::Uuid;

use crate::{
    api::error,
    modules::comment::{
        model::{CommentView, CreateComment},
        repository::CommentRepository,
        schema::CommentEntity,
    },
    utils::new_id,
};

#[derive(Clone)]
pub struct CommentRepositoryPg {
    pool: sqlx::PgPool,
}

impl CommentRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CommentRepository for CommentRepositoryPg {
    async fn create(&self, comment: &CreateComment) -> Result<CommentEntity, error::SystemError> {
        let comment = sqlx::query_as::<_, CommentEntity>(
            r#"
            INSERT INTO comments (id, user_id, post_id, body)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(new_id())
        .bind(comment.user_id)
        .bind(comment.post_id)
        .bind(&comment.body)
        .fetch_one(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn find_by_post(&self, post_id: &Uuid) -> Result<Vec<CommentView>, error::SystemError> {
        // has index on (post_id, created_on)
        let comments = sqlx::query_as::<_, CommentView>(
            r#"
            SELECT
                c.id,
                c.user_id,
                u.username,
                c.post_id,
                p.title AS post_title,
                c.body,
                c.created_on,
                c.edited_on,
                c.deleted_on
            FROM comments c
            JOIN users u ON u.id = c.user_id
            JOIN posts p ON p.id = c.post_id
            WHERE c.post_id = $1
            ORDER BY c.created_on ASC, c.id ASC
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }
}
