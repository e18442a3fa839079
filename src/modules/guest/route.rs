use crate::modules::guest::handle::*;
use actix_web::web::{ServiceConfig, scope};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/guests")
            .service(create_guest_profile)
            .service(list_guest_profiles)
            .service(get_guest_profile),
    );
}
