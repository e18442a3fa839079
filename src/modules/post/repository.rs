use uuid::Uuid;

use crate::api::error;
use crate::modules::post::{
    model::{CreatePost, UpdatePost},
    schema::PostEntity,
};

#[async_trait::async_trait]
pub trait PostRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<PostEntity>, error::SystemError>;

    /// Oldest first.
    async fn find_all(&self) -> Result<Vec<PostEntity>, error::SystemError>;

    async fn find_by_author(&self, author_id: &Uuid)
    -> Result<Vec<PostEntity>, error::SystemError>;

    async fn create(&self, post: &CreatePost) -> Result<PostEntity, error::SystemError>;

    async fn update(
        &self,
        id: &Uuid,
        post: &UpdatePost,
    ) -> Result<Option<PostEntity>, error::SystemError>;

    async fn set_like(
        &self,
        id: &Uuid,
        user_id: Option<Uuid>,
    ) -> Result<Option<PostEntity>, error::SystemError>;
}
