use actix_web::{delete, get, post, web};
use uuid::Uuid;

use crate::{
    api::{error, success},
    modules::{
        child::{
            model::{
                AddFriendBody, ChildProfileResponse, CreateChildProfile, FriendCountResponse,
                FriendResponse,
            },
            repository_pg::ChildRepositoryPg,
            service::ChildService,
        },
        user::repository_pg::UserRepositoryPg,
    },
    utils::ValidatedJson,
};

pub type ChildSvc = ChildService<ChildRepositoryPg, UserRepositoryPg>;

#[post("")]
pub async fn create_child_profile(
    child_service: web::Data<ChildSvc>,
    body: ValidatedJson<CreateChildProfile>,
) -> Result<success::Success<ChildProfileResponse>, error::Error> {
    let child = child_service.create(body.0).await?;
    Ok(success::Success::created(Some(child)).message("Child profile created successfully"))
}

#[get("/{id}")]
pub async fn get_child_profile(
    child_service: web::Data<ChildSvc>,
    id: web::Path<Uuid>,
) -> Result<success::Success<ChildProfileResponse>, error::Error> {
    let child = child_service.get_by_id(*id).await?;
    Ok(success::Success::ok(Some(child)))
}

#[get("/parent/{parent_id}")]
pub async fn list_child_profiles(
    child_service: web::Data<ChildSvc>,
    parent_id: web::Path<Uuid>,
) -> Result<success::Success<Vec<ChildProfileResponse>>, error::Error> {
    let children = child_service.list_for_parent(*parent_id).await?;
    Ok(success::Success::ok(Some(children)))
}

#[get("/{id}/friends")]
pub async fn list_friends(
    child_service: web::Data<ChildSvc>,
    id: web::Path<Uuid>,
) -> Result<success::Success<Vec<FriendResponse>>, error::Error> {
    let friends = child_service.get_friends(*id).await?;
    Ok(success::Success::ok(Some(friends)).message("Friends retrieved successfully"))
}

#[get("/{id}/friends/count")]
pub async fn count_friends(
    child_service: web::Data<ChildSvc>,
    id: web::Path<Uuid>,
) -> Result<success::Success<FriendCountResponse>, error::Error> {
    let friends = child_service.get_friends_no(*id).await?;
    Ok(success::Success::ok(Some(FriendCountResponse { child_id: *id, friends })))
}

#[post("/{id}/friends")]
pub async fn add_friend(
    child_service: web::Data<ChildSvc>,
    id: web::Path<Uuid>,
    body: web::Json<AddFriendBody>,
) -> Result<success::Success<()>, error::Error> {
    child_service.add_friend(*id, body.user_id).await?;
    Ok(success::Success::ok(None).message("Friend added successfully"))
}

#[delete("/{id}/friends/{user_id}")]
pub async fn remove_friend(
    child_service: web::Data<ChildSvc>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<success::Success<()>, error::Error> {
    let (id, user_id) = path.into_inner();
    child_service.remove_friend(id, user_id).await?;
    Ok(success::Success::no_content())
}
