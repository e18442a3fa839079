use actix_web::{get, patch, post, web};
use uuid::Uuid;

use crate::{
    api::{error, success},
    modules::relationship::{
        model::{RelationshipView, SendInviteBody, UpdateStatusBody},
        schema::RelationshipEntity,
        service::RelationshipService,
    },
};

#[post("")]
pub async fn send_invite(
    relationship_service: web::Data<RelationshipService>,
    body: web::Json<SendInviteBody>,
) -> Result<success::Success<RelationshipEntity>, error::Error> {
    let relationship = relationship_service.send(body.sender_id, body.receiver_id).await?;
    Ok(success::Success::created(Some(relationship)).message("Invite sent successfully"))
}

#[get("/{id}")]
pub async fn get_relationship(
    relationship_service: web::Data<RelationshipService>,
    id: web::Path<Uuid>,
) -> Result<success::Success<RelationshipEntity>, error::Error> {
    let relationship = relationship_service.get_by_id(*id).await?;
    Ok(success::Success::ok(Some(relationship)))
}

#[post("/{id}/accept")]
pub async fn accept_invite(
    relationship_service: web::Data<RelationshipService>,
    id: web::Path<Uuid>,
) -> Result<success::Success<RelationshipEntity>, error::Error> {
    let relationship = relationship_service.accept(*id).await?;
    Ok(success::Success::ok(Some(relationship)).message("Invite accepted successfully"))
}

#[patch("/{id}")]
pub async fn update_status(
    relationship_service: web::Data<RelationshipService>,
    id: web::Path<Uuid>,
    body: web::Json<UpdateStatusBody>,
) -> Result<success::Success<RelationshipEntity>, error::Error> {
    let relationship = relationship_service.set_status(*id, body.status).await?;
    Ok(success::Success::ok(Some(relationship)))
}

#[get("/sent/{child_id}")]
pub async fn list_sent(
    relationship_service: web::Data<RelationshipService>,
    child_id: web::Path<Uuid>,
) -> Result<success::Success<Vec<RelationshipView>>, error::Error> {
    let relationships = relationship_service.list_sent(*child_id).await?;
    Ok(success::Success::ok(Some(relationships)))
}

#[get("/received/{guest_id}")]
pub async fn list_received(
    relationship_service: web::Data<RelationshipService>,
    guest_id: web::Path<Uuid>,
) -> Result<success::Success<Vec<RelationshipView>>, error::Error> {
    let relationships = relationship_service.list_received(*guest_id).await?;
    Ok(success::Success::ok(Some(relationships)))
}
