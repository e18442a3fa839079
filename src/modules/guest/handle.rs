use actix_web::{get, post, web};
use uuid::Uuid;

use crate::{
    api::{error, success},
    modules::guest::{
        model::{CreateGuestProfile, GuestProfileResponse},
        service::GuestService,
    },
    utils::ValidatedJson,
};

#[post("")]
pub async fn create_guest_profile(
    guest_service: web::Data<GuestService>,
    body: ValidatedJson<CreateGuestProfile>,
) -> Result<success::Success<GuestProfileResponse>, error::Error> {
    let profile = guest_service.create(body.0).await?;
    Ok(success::Success::created(Some(profile)).message("Guest profile created successfully"))
}

#[get("/{id}")]
pub async fn get_guest_profile(
    guest_service: web::Data<GuestService>,
    id: web::Path<Uuid>,
) -> Result<success::Success<GuestProfileResponse>, error::Error> {
    let profile = guest_service.get_by_id(*id).await?;
    Ok(success::Success::ok(Some(profile)))
}

#[get("/user/{user_id}")]
pub async fn list_guest_profiles(
    guest_service: web::Data<GuestService>,
    user_id: web::Path<Uuid>,
) -> Result<success::Success<Vec<GuestProfileResponse>>, error::Error> {
    let profiles = guest_service.list_for_user(*user_id).await?;
    Ok(success::Success::ok(Some(profiles)))
}
