mod config;
mod directory;
mod errors;
mod handlers;
mod models;
mod store;
mod utils;

use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use crate::config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let state = store::create_state(&config)
        .await
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;
    let state = web::Data::new(state);

    info!("Theme preference file: {}", config.theme_file.display());
    info!("Starting server at {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(handlers::configure)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
