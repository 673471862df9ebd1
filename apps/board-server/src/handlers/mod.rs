//! HTTP handlers and route configuration.

mod health;
mod posts;

#[cfg(test)]
mod tests;

use actix_web::web;

use crate::middleware::error::json_config;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .route("/", web::get().to(posts::first_page))
                .route("/post", web::post().to(posts::write))
                .route("/post/check/{id}", web::post().to(posts::check_password))
                .route("/post/{id}", web::get().to(posts::get))
                .route("/post/{id}", web::patch().to(posts::edit))
                .route("/post/{id}", web::delete().to(posts::delete))
                .route("/{page}", web::get().to(posts::page)),
        );
}
