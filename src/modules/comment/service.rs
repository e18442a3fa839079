use log::info;
use std::sync::Arc;

use uuid::Uuid;

use crate::{
    api::error,
    modules::{
        comment::{
            model::{CommentView, CreateComment},
            repository::CommentRepository,
            schema::CommentEntity,
        },
        post::repository::PostRepository,
    },
};

#[derive(Clone)]
pub struct CommentService<C, P>
where
    C: CommentRepository + Send + Sync,
    P: PostRepository + Send + Sync,
{
    comment_repo: Arc<C>,
    post_repo: Arc<P>,
}

impl<C, P> CommentService<C, P>
where
    C: CommentRepository + Send + Sync,
    P: PostRepository + Send + Sync,
{
    pub fn with_dependencies(comment_repo: Arc<C>, post_repo: Arc<P>) -> Self {
        info!("CommentService initialized with dependencies");
        CommentService { comment_repo, post_repo }
    }

    pub async fn create(&self, comment: CreateComment) -> Result<CommentEntity, error::SystemError> {
        if self.post_repo.find_by_id(&comment.post_id).await?.is_none() {
            return Err(error::SystemError::not_found("Post not found"));
        }

        let entity = self.comment_repo.create(&comment).await?;
        info!("Comment {} created on post {} by user {}", entity.id, entity.post_id, entity.user_id);
        Ok(entity)
    }

    /// Comments on a post, oldest first.
    pub async fn list_for_post(
        &self,
        post_id: Uuid,
    ) -> Result<Vec<CommentView>, error::SystemError> {
        let (post, comments) = tokio::try_join!(
            self.post_repo.find_by_id(&post_id),
            self.comment_repo.find_by_post(&post_id),
        )?;

        if post.is_none() {
            return Err(error::SystemError::not_found("Post not found"));
        }

        Ok(comments)
    }
}
