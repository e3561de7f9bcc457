pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod models;
pub mod openapi;
pub mod schema;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::errors::AppError;

pub use application::{BeerOrderService, BeerOrderServiceImpl};
pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type MigrationError = Box<dyn std::error::Error + Send + Sync>;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), MigrationError> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    log::info!("Applied {} pending migration(s)", applied.len());
    Ok(())
}

/// Register the order routes, extractor error handling and API docs.
pub fn configure(cfg: &mut web::ServiceConfig, service: Arc<dyn BeerOrderService>) {
    cfg.app_data(web::Data::from(service))
        .app_data(
            web::PathConfig::default()
                .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
        )
        .app_data(
            web::QueryConfig::default()
                .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
        )
        .service(
            web::scope("/api/v1/customers/{customerId}/orders")
                .route("", web::get().to(handlers::orders::list_orders))
                .route("/{orderId}", web::get().to(handlers::orders::get_order)),
        )
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        );
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    service: Arc<dyn BeerOrderService>,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        let service = service.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| configure(cfg, service))
    })
    .bind((host.to_string(), port))?
    .run())
}
