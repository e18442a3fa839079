use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::modules::post::schema::PostEntity;

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePost {
    #[validate(length(min = 1, max = 200, message = "Title must be 1 to 200 characters long"))]
    pub title: String,
    pub author_id: Uuid,
    pub content: String,
    pub featured_image: Option<String>,
    pub media: Option<String>,
    pub likes_id: Option<Uuid>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdatePost {
    #[validate(length(min = 1, max = 200, message = "Title must be 1 to 200 characters long"))]
    pub title: Option<String>,
    pub content: Option<String>,
    pub featured_image: Option<String>,
    pub media: Option<String>,
}

impl UpdatePost {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.featured_image.is_none()
            && self.media.is_none()
    }
}

#[derive(Debug, Deserialize)]
pub struct SetLikeBody {
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    #[serde(flatten)]
    pub post: PostEntity,
    pub number_of_likes: i64,
    pub url: &'static str,
}

impl From<PostEntity> for PostResponse {
    fn from(post: PostEntity) -> Self {
        PostResponse { number_of_likes: post.number_of_likes(), url: post.absolute_url(), post }
    }
}
