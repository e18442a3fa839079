use actix_web::{self, App, HttpServer, middleware::Logger, web};
use std::sync::{Arc, LazyLock};

use crate::{
    configs::{connect_database, run_migrations},
    modules::{
        child::{repository_pg::ChildRepositoryPg, service::ChildService},
        comment::{repository_pg::CommentRepositoryPg, service::CommentService},
        guest::{repository_pg::GuestRepositoryPg, service::GuestService},
        parent::{repository_pg::ParentRepositoryPg, service::ParentService},
        post::{repository_pg::PostRepositoryPg, service::PostService},
        relationship::{repository_pg::RelationshipRepositoryPg, service::RelationshipService},
        user::{repository_pg::UserRepositoryPg, service::UserService},
    },
};

mod api;
mod configs;
mod constants;
mod modules;
#[cfg(test)]
mod test;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[actix_web::get("/")]
async fn health_check() -> &'static str {
    "Server is running"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let db_pool =
        connect_database().await.map_err(|_| std::io::Error::other("Database connection error"))?;

    run_migrations(&db_pool).await.map_err(|_| std::io::Error::other("Database migration error"))?;

    let user_repo = Arc::new(UserRepositoryPg::new(db_pool.clone()));
    let post_repo = Arc::new(PostRepositoryPg::new(db_pool.clone()));

    let user_service = web::Data::new(UserService::with_dependencies(user_repo.clone()));
    let parent_service = web::Data::new(ParentService::with_dependencies(Arc::new(
        ParentRepositoryPg::new(db_pool.clone()),
    )));
    let guest_service = web::Data::new(GuestService::with_dependencies(Arc::new(
        GuestRepositoryPg::new(db_pool.clone()),
    )));
    let child_service = web::Data::new(ChildService::with_dependencies(
        Arc::new(ChildRepositoryPg::new(db_pool.clone())),
        user_repo,
    ));
    let relationship_service = web::Data::new(RelationshipService::with_dependencies(Arc::new(
        RelationshipRepositoryPg::new(db_pool.clone()),
    )));
    let post_service = web::Data::new(PostService::with_dependencies(post_repo.clone()));
    let comment_service = web::Data::new(CommentService::with_dependencies(
        Arc::new(CommentRepositoryPg::new(db_pool.clone())),
        post_repo,
    ));

    log::info!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .app_data(parent_service.clone())
            .app_data(guest_service.clone())
            .app_data(child_service.clone())
            .app_data(relationship_service.clone())
            .app_data(post_service.clone())
            .app_data(comment_service.clone())
            .service(health_check)
            .service(
                web::scope("/api")
                    .configure(modules::user::route::configure)
                    .configure(modules::parent::route::configure)
                    .configure(modules::guest::route::configure)
                    .configure(modules::child::route::configure)
                    .configure(modules::relationship::route::configure)
                    .configure(modules::post::route::configure),
            )
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(2)
    .run()
    .await
}
