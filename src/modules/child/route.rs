use crate::modules::child::handle::*;
use actix_web::web::{ServiceConfig, scope};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/children")
            .service(create_child_profile)
            .service(list_child_profiles)
            .service(count_friends)
            .service(list_friends)
            .service(add_friend)
            .service(remove_friend)
            .service(get_child_profile),
    );
}
