mod config;
mod db;
mod errors;
mod handlers;
mod models;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::io;

use crate::config::Config;
use crate::db::{Database, PgStore};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(io::Error::other)?;

    let db = Database::connect(&config).await.map_err(io::Error::other)?;
    if config.run_migrations {
        db.migrate().await.map_err(io::Error::other)?;
        info!("Database migrations applied");
    }
    let store = web::Data::new(PgStore::new(db));

    info!("Starting server at {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(handlers::configure::<PgStore>)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
