use log::info;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::error;
use crate::modules::post::{
    model::{CreatePost, PostResponse, UpdatePost},
    repository::PostRepository,
};

#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository + Send + Sync>,
}

impl PostService {
    pub fn with_dependencies(repo: Arc<dyn PostRepository + Send + Sync>) -> Self {
        info!("PostService initialized with dependencies");
        PostService { repo }
    }

    pub async fn create(&self, post: CreatePost) -> Result<PostResponse, error::SystemError> {
        let entity = self.repo.create(&post).await?;
        info!("Post {} created by user {}", entity.id, entity.author_id);
        Ok(entity.into())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<PostResponse, error::SystemError> {
        self.repo
            .find_by_id(&id)
            .await?
            .map(PostResponse::from)
            .ok_or_else(|| error::SystemError::not_found("Post not found"))
    }

    pub async fn list(&self) -> Result<Vec<PostResponse>, error::SystemError> {
        let posts = self.repo.find_all().await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    pub async fn list_by_author(
        &self,
        author_id: Uuid,
    ) -> Result<Vec<PostResponse>, error::SystemError> {
        let posts = self.repo.find_by_author(&author_id).await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        post: UpdatePost,
    ) -> Result<PostResponse, error::SystemError> {
        if post.is_empty() {
            return Err(error::SystemError::bad_request("No fields to update"));
        }

        self.repo
            .update(&id, &post)
            .await?
            .map(PostResponse::from)
            .ok_or_else(|| error::SystemError::not_found("Post not found"))
    }

    /// Replaces the post's single like reference; `None` clears it.
    pub async fn set_like(
        &self,
        id: Uuid,
        user_id: Option<Uuid>,
    ) -> Result<PostResponse, error::SystemError> {
        self.repo
            .set_like(&id, user_id)
            .await?
            .map(PostResponse::from)
            .ok_or_else(|| error::SystemError::not_found("Post not found"))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::modules::post::schema::PostEntity;
    use std::sync::Mutex;

    #[derive(Default)]
    pub(crate) struct InMemoryPosts {
        pub(crate) rows: Mutex<Vec<PostEntity>>,
    }

    #[async_trait::async_trait]
    impl PostRepository for InMemoryPosts {
        async fn find_by_id(&self, id: &Uuid) -> Result<Option<PostEntity>, error::SystemError> {
            Ok(self.rows.lock().unwrap().iter().find(|p| p.id == *id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<PostEntity>, error::SystemError> {
            let mut posts = self.rows.lock().unwrap().clone();
            posts.sort_by_key(|p| p.created_at);
            Ok(posts)
        }

        async fn find_by_author(
            &self,
            author_id: &Uuid,
        ) -> Result<Vec<PostEntity>, error::SystemError> {
            let mut posts = self.find_all().await?;
            posts.retain(|p| p.author_id == *author_id);
            Ok(posts)
        }

        async fn create(&self, post: &CreatePost) -> Result<PostEntity, error::SystemError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|p| p.title == post.title) {
                return Err(error::SystemError::Conflict(None));
            }
            let now = chrono::Utc::now();
            let entity = PostEntity {
                id: crate::utils::new_id(),
                title: post.title.clone(),
                author_id: post.author_id,
                content: post.content.clone(),
                featured_image: "placeholder".to_string(),
                media: "placeholder".to_string(),
                created_at: now,
                updated_at: now,
                deleted_at: now,
                likes_id: post.likes_id,
            };
            rows.push(entity.clone());
            Ok(entity)
        }

        async fn update(
            &self,
            id: &Uuid,
            post: &UpdatePost,
        ) -> Result<Option<PostEntity>, error::SystemError> {
            let mut rows = self.rows.lock().unwrap();
            Ok(rows.iter_mut().find(|p| p.id == *id).map(|p| {
                if let Some(title) = &post.title {
                    p.title = title.clone();
                }
                if let Some(content) = &post.content {
                    p.content = content.clone();
                }
                let now = chrono::Utc::now();
                p.updated_at = now;
                p.deleted_at = now;
                p.clone()
            }))
        }

        async fn set_like(
            &self,
            id: &Uuid,
            user_id: Option<Uuid>,
        ) -> Result<Option<PostEntity>, error::SystemError> {
            let mut rows = self.rows.lock().unwrap();
            Ok(rows.iter_mut().find(|p| p.id == *id).map(|p| {
                p.likes_id = user_id;
                p.clone()
            }))
        }
    }

    pub(crate) fn new_post(title: &str, author_id: Uuid) -> CreatePost {
        CreatePost {
            title: title.to_string(),
            author_id,
            content: "Lovely day at the park".to_string(),
            featured_image: None,
            media: None,
            likes_id: None,
        }
    }

    fn service() -> PostService {
        PostService::with_dependencies(Arc::new(InMemoryPosts::default()))
    }

    #[actix_web::test]
    async fn test_like_count_is_zero_or_one() {
        let service = service();
        let post = service.create(new_post("Park", Uuid::now_v7())).await.unwrap();
        assert_eq!(post.number_of_likes, 0);

        let liked = service.set_like(post.post.id, Some(Uuid::now_v7())).await.unwrap();
        assert_eq!(liked.number_of_likes, 1);

        // a second liker replaces the first
        let relike = service.set_like(post.post.id, Some(Uuid::now_v7())).await.unwrap();
        assert_eq!(relike.number_of_likes, 1);

        service.set_like(post.post.id, None).await.unwrap();
        assert_eq!(service.get_by_id(post.post.id).await.unwrap().number_of_likes, 0);
    }

    #[actix_web::test]
    async fn test_duplicate_title_conflicts() {
        let service = service();
        service.create(new_post("Park", Uuid::now_v7())).await.unwrap();
        let err = service.create(new_post("Park", Uuid::now_v7())).await.unwrap_err();
        assert!(matches!(err, error::SystemError::Conflict(_)));
    }

    #[actix_web::test]
    async fn test_update_refreshes_updated_and_deleted_stamps() {
        let service = service();
        let post = service.create(new_post("Park", Uuid::now_v7())).await.unwrap().post;

        let updated = service
            .update(post.id, UpdatePost { content: Some("Rainy".to_string()), ..Default::default() })
            .await
            .unwrap()
            .post;

        assert_eq!(updated.content, "Rainy");
        assert_eq!(updated.created_at, post.created_at);
        assert!(updated.updated_at >= post.updated_at);
        assert_eq!(updated.deleted_at, updated.updated_at);
    }

    #[actix_web::test]
    async fn test_empty_update_is_rejected() {
        let service = service();
        let post = service.create(new_post("Park", Uuid::now_v7())).await.unwrap();
        let err = service.update(post.post.id, UpdatePost::default()).await.unwrap_err();
        assert!(matches!(err, error::SystemError::BadRequest(_)));
    }

    #[actix_web::test]
    async fn test_list_is_oldest_first() {
        let service = service();
        let author = Uuid::now_v7();
        for title in ["first", "second", "third"] {
            service.create(new_post(title, author)).await.unwrap();
        }
        let titles: Vec<String> =
            service.list().await.unwrap().into_iter().map(|p| p.post.to_string()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
        assert_eq!(service.list_by_author(author).await.unwrap().len(), 3);
    }

    #[test]
    fn test_response_carries_url_and_like_count() {
        let now = chrono::Utc::now();
        let post = PostEntity {
            id: Uuid::nil(),
            title: "Park".to_string(),
            author_id: Uuid::nil(),
            content: String::new(),
            featured_image: "placeholder".to_string(),
            media: "placeholder".to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: now,
            likes_id: Some(Uuid::nil()),
        };
        let json = serde_json::to_value(PostResponse::from(post)).unwrap();
        assert_eq!(json["number_of_likes"], 1);
        assert_eq!(json["url"], "/profile");
        assert_eq!(json["title"], "Park");
    }
}
