use actix_web::web;
use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/chat", web::post().to(handlers::chat))
        .route("/health", web::get().to(handlers::health_check));
}
