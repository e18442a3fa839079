use uuid::Uuid;

use crate::api::error;
use crate::modules::comment::{
    model::{CommentView, CreateComment},
    schema::CommentEntity,
};

#[async_trait::async_trait]
pub trait CommentRepository {
    async fn create(&self, comment: &CreateComment) -> Result<CommentEntity, error::SystemError>;

    /// Oldest first.
    async fn find_by_post(&self, post_id: &Uuid) -> Result<Vec<CommentView>, error::SystemError>;
}
