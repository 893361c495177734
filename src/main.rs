use actix_web::{web, App, HttpServer};
use org_roster::config::EnvConfig;
use org_roster::db::database_service::DatabaseService;
use org_roster::routes::configure_routes;
use org_roster::utils::webutils::ServiceKey;
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = match EnvConfig::from_env() {
        Ok(c) => c,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, err));
        }
    };
    let addr = format!("0.0.0.0:{}", config.port);

    let database_service = Arc::new(
        DatabaseService::new(&config.db_url, config.db_max_connections)
            .await
            .map_err(|err| {
                error!("Failed to initialize DatabaseService: {}", err);
                std::io::Error::new(std::io::ErrorKind::Other, err)
            })?,
    );

    let service_key = ServiceKey::new(config.service_key.clone());

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&database_service)))
            .app_data(web::Data::new(service_key.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
