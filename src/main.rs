use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use chrono::Duration;

use todoapp::auth::{AuthMiddleware, TokenService};
use todoapp::config::Config;
use todoapp::routes;
use todoapp::store::PgStore;
use todoapp::AppState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    let store = Arc::new(
        PgStore::connect(&config.database_url)
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?,
    );

    let tokens = TokenService::new(&config.jwt_secret, Duration::minutes(config.token_ttl_minutes));
    let state = web::Data::new(
        AppState::new(store.clone(), store, tokens).with_bcrypt_cost(config.bcrypt_cost),
    );

    log::info!("Starting todoapp server at {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(AuthMiddleware)
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
