// src/api/routes.rs
use super::handlers;
use actix_web::web;
use super::middleware::TokenValidator;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Liveness probe (no auth)
    cfg.route("/health", web::get().to(handlers::system::health_check));

    // Password generator (protected by token auth)
    cfg.service(
        web::resource("/generate")
            .wrap(TokenValidator)
            .route(web::post().to(handlers::generator::generate_password))
    );
    cfg.service(
        web::resource("/analyze")
            .wrap(TokenValidator)
            .route(web::post().to(handlers::generator::analyze_password))
    );

    // Password history (protected by token auth)
    cfg.service(
        web::scope("/history")
            .wrap(TokenValidator)
            .route("", web::get().to(handlers::history::list_history))
            .route("", web::delete().to(handlers::history::clear_history))
            .route("/{index}", web::delete().to(handlers::history::delete_history_item))
    );
}
