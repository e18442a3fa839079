use crate::modules::{comment, post::handle::*};
use actix_web::web::{ServiceConfig, scope};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/posts")
            .service(create_post)
            .service(list_posts)
            .service(list_posts_by_author)
            .service(set_like)
            .configure(comment::route::configure)
            .service(update_post)
            .service(get_post),
    );
}
