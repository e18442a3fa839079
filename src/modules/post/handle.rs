use actix_web::{get, patch, post, put, web};
use uuid::Uuid;

use crate::{
    api::{error, success},
    modules::post::{
        model::{CreatePost, PostResponse, SetLikeBody, UpdatePost},
        service::PostService,
    },
    utils::ValidatedJson,
};

#[post("")]
pub async fn create_post(
    post_service: web::Data<PostService>,
    body: ValidatedJson<CreatePost>,
) -> Result<success::Success<PostResponse>, error::Error> {
    let post = post_service.create(body.0).await?;
    Ok(success::Success::created(Some(post)).message("Post created successfully"))
}

#[get("")]
pub async fn list_posts(
    post_service: web::Data<PostService>,
) -> Result<success::Success<Vec<PostResponse>>, error::Error> {
    let posts = post_service.list().await?;
    Ok(success::Success::ok(Some(posts)))
}

#[get("/author/{author_id}")]
pub async fn list_posts_by_author(
    post_service: web::Data<PostService>,
    author_id: web::Path<Uuid>,
) -> Result<success::Success<Vec<PostResponse>>, error::Error> {
    let posts = post_service.list_by_author(*author_id).await?;
    Ok(success::Success::ok(Some(posts)))
}

#[get("/{id}")]
pub async fn get_post(
    post_service: web::Data<PostService>,
    id: web::Path<Uuid>,
) -> Result<success::Success<PostResponse>, error::Error> {
    let post = post_service.get_by_id(*id).await?;
    Ok(success::Success::ok(Some(post)))
}

#[patch("/{id}")]
pub async fn update_post(
    post_service: web::Data<PostService>,
    id: web::Path<Uuid>,
    body: ValidatedJson<UpdatePost>,
) -> Result<success::Success<PostResponse>, error::Error> {
    let post = post_service.update(*id, body.0).await?;
    Ok(success::Success::ok(Some(post)).message("Post updated successfully"))
}

#[put("/{id}/like")]
pub async fn set_like(
    post_service: web::Data<PostService>,
    id: web::Path<Uuid>,
    body: web::Json<SetLikeBody>,
) -> Result<success::Success<PostResponse>, error::Error> {
    let post = post_service.set_like(*id, body.user_id).await?;
    Ok(success::Success::ok(Some(post)))
}
