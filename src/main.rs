use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};

use tarefas_api::auth::TokenService;
use tarefas_api::config::Config;
use tarefas_api::{db, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let pool = db::init_pool(&config.database_url)
        .await
        .expect("Failed to open database");

    // One token service for the process: the login handler and the auth gate
    // share clones of it, so tokens are always checked against the key they
    // were issued with.
    let tokens = TokenService::new(&config.secret_key);

    log::info!("Starting server at {}", config.server_url());

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config(tokens.clone()))
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
