use actix_web::{middleware::Logger, web, App, HttpServer};
use org_auth::config::EnvConfig;
use org_auth::db::database_service::DatabaseService;
use org_auth::routes::configure_routes;
use org_auth::utils::token::TokenService;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    org_auth::init_tracing();

    let config = EnvConfig::from_env().map_err(|e| {
        error!("invalid configuration: {e}");
        std::io::Error::other(e)
    })?;

    let database_service = DatabaseService::new(&config.db_url, config.db_max_connections)
        .await
        .map_err(|e| {
            error!("failed to initialize database: {e}");
            std::io::Error::other(e)
        })?;
    let token_service = TokenService::from_config(&config.jwt);

    let db = web::Data::new(database_service);
    let tokens = web::Data::new(token_service);
    let addr = config.bind_addr();

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(db.clone())
            .app_data(tokens.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
