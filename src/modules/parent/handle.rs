use actix_web::{get, post, web};
use uuid::Uuid;

use crate::{
    api::{error, success},
    modules::parent::{
        model::{CreateParentProfile, ParentProfileResponse},
        service::ParentService,
    },
    utils::ValidatedJson,
};

#[post("")]
pub async fn create_parent_profile(
    parent_service: web::Data<ParentService>,
    body: ValidatedJson<CreateParentProfile>,
) -> Result<success::Success<ParentProfileResponse>, error::Error> {
    let profile = parent_service.create(body.0).await?;
    Ok(success::Success::created(Some(profile)).message("Parent profile created successfully"))
}

#[get("/{id}")]
pub async fn get_parent_profile(
    parent_service: web::Data<ParentService>,
    id: web::Path<Uuid>,
) -> Result<success::Success<ParentProfileResponse>, error::Error> {
    let profile = parent_service.get_by_id(*id).await?;
    Ok(success::Success::ok(Some(profile)))
}

#[get("/user/{user_id}")]
pub async fn list_parent_profiles(
    parent_service: web::Data<ParentService>,
    user_id: web::Path<Uuid>,
) -> Result<success::Success<Vec<ParentProfileResponse>>, error::Error> {
    let profiles = parent_service.list_for_user(*user_id).await?;
    Ok(success::Success::ok(Some(profiles)))
}
