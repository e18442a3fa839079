use crate::modules::parent::handle::*;
use actix_web::web::{ServiceConfig, scope};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/parents")
            .service(create_parent_profile)
            .service(list_parent_profiles)
            .service(get_parent_profile),
    );
}
