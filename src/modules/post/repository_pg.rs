use uuid::Uuid;

use crate::{
    api::error,
    constants::PLACEHOLDER_IMAGE,
    modules::post::{
        model::{CreatePost, UpdatePost},
        repository::PostRepository,
        schema::PostEntity,
    },
    utils::new_id,
};

#[derive(Clone)]
pub struct PostRepositoryPg {
    pool: sqlx::PgPool,
}

impl PostRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl PostRepository for PostRepositoryPg {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<PostEntity>, error::SystemError> {
        let post = sqlx::query_as::<_, PostEntity>("SELECT * FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(post)
    }

    async fn find_all(&self) -> Result<Vec<PostEntity>, error::SystemError> {
        // has index on (created_at)
        let posts =
            sqlx::query_as::<_, PostEntity>("SELECT * FROM posts ORDER BY created_at ASC, id ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(posts)
    }

    async fn find_by_author(
        &self,
        author_id: &Uuid,
    ) -> Result<Vec<PostEntity>, error::SystemError> {
        let posts = sqlx::query_as::<_, PostEntity>(
            "SELECT * FROM posts WHERE author_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    async fn create(&self, post: &CreatePost) -> Result<PostEntity, error::SystemError> {
        let post = sqlx::query_as::<_, PostEntity>(
            r#"
            INSERT INTO posts (id, title, author_id, content, featured_image, media, likes_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(new_id())
        .bind(&post.title)
        .bind(post.author_id)
        .bind(&post.content)
        .bind(post.featured_image.as_deref().unwrap_or(PLACEHOLDER_IMAGE))
        .bind(post.media.as_deref().unwrap_or(PLACEHOLDER_IMAGE))
        .bind(post.likes_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(post)
    }

    async fn update(
        &self,
        id: &Uuid,
        post: &UpdatePost,
    ) -> Result<Option<PostEntity>, error::SystemError> {
        // updated_at and deleted_at are refreshed by the posts_touch trigger
        let post = sqlx::query_as::<_, PostEntity>(
            r#"
        UPDATE posts
        SET
            title          = COALESCE($2, title),
            content        = COALESCE($3, content),
            featured_image = COALESCE($4, featured_image),
            media          = COALESCE($5, media)
        WHERE id = $1
        RETURNING *
        "#,
        )
        .bind(id)
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.featured_image)
        .bind(&post.media)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn set_like(
        &self,
        id: &Uuid,
        user_id: Option<Uuid>,
    ) -> Result<Option<PostEntity>, error::SystemError> {
        let post = sqlx::query_as::<_, PostEntity>(
            "UPDATE posts SET likes_id = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }
}
