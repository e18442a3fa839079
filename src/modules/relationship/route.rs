use crate::modules::relationship::handle::*;
use actix_web::web::{ServiceConfig, scope};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/relationships")
            .service(send_invite)
            .service(list_sent)
            .service(list_received)
            .service(accept_invite)
            .service(update_status)
            .service(get_relationship),
    );
}
