use actix_web::{get, post, web};
use uuid::Uuid;

use crate::{
    api::{error, success},
    modules::{
        comment::{
            model::{CommentBody, CommentView, CreateComment},
            repository_pg::CommentRepositoryPg,
            schema::CommentEntity,
            service::CommentService,
        },
        post::repository_pg::PostRepositoryPg,
    },
};

pub type CommentSvc = CommentService<CommentRepositoryPg, PostRepositoryPg>;

#[post("/{post_id}/comments")]
pub async fn create_comment(
    comment_service: web::Data<CommentSvc>,
    post_id: web::Path<Uuid>,
    body: web::Json<CommentBody>,
) -> Result<success::Success<CommentEntity>, error::Error> {
    let body = body.into_inner();
    let comment = comment_service
        .create(CreateComment { user_id: body.user_id, post_id: *post_id, body: body.body })
        .await?;
    Ok(success::Success::created(Some(comment)).message("Comment created successfully"))
}

#[get("/{post_id}/comments")]
pub async fn list_comments(
    comment_service: web::Data<CommentSvc>,
    post_id: web::Path<Uuid>,
) -> Result<success::Success<Vec<CommentView>>, error::Error> {
    let comments = comment_service.list_for_post(*post_id).await?;
    Ok(success::Success::ok(Some(comments)))
}
