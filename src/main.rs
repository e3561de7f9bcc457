use std::io;
use std::sync::Arc;

use brewery_order_service::config::Settings;
use brewery_order_service::infrastructure::DieselBeerOrderRepository;
use brewery_order_service::{
    build_server, create_pool, run_migrations, BeerOrderService, BeerOrderServiceImpl,
};
use dotenvy::dotenv;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Settings::from_env().map_err(io::Error::other)?;

    let pool = create_pool(&settings.database_url).map_err(io::Error::other)?;
    run_migrations(&pool).map_err(io::Error::other)?;

    let service: Arc<dyn BeerOrderService> =
        Arc::new(BeerOrderServiceImpl::new(DieselBeerOrderRepository::new(pool)));

    log::info!(
        "Starting server at http://{}:{}",
        settings.host,
        settings.port
    );

    build_server(service, &settings.host, settings.port)?.await
}
