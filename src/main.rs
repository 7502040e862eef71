mod config;
mod db;
mod error;
mod models;
mod routes;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use crate::config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let config = Config::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        std::io::Error::other(e)
    })?;

    info!("Connecting to database...");
    let db = db::establish_connection(&config).await.map_err(|e| {
        error!("Database unreachable: {}", e);
        std::io::Error::other(e)
    })?;
    info!("Successfully connected to PostgreSQL");

    db::ensure_schema(&db).await.map_err(|e| {
        error!("Failed to create stocks table: {}", e);
        std::io::Error::other(e)
    })?;

    let db = web::Data::new(db);

    info!("Starting server on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(db.clone())
            .wrap(Logger::default())
            .configure(routes::configure_routes)
            .default_service(web::to(routes::not_found))
    })
        .bind((config.host.clone(), config.port))?
        .run()
        .await
}
