use crate::modules::comment::handle::*;
use actix_web::web::ServiceConfig;

/// Registered inside the `/posts` scope.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(create_comment).service(list_comments);
}
