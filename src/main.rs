use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use feedback_service::api;
use feedback_service::config::ServiceConfig;
use feedback_service::db::Database;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::from_env();

    // Initialize the store and make sure the collection exists
    let db = Database::open(&config.store)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;
    db.create_schema()
        .await
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;

    info!("listening on http://{}", config.bind_addr);

    let db = web::Data::new(db);
    HttpServer::new(move || App::new().app_data(db.clone()).configure(api::routes))
        .bind(&config.bind_addr)?
        .run()
        .await
}
