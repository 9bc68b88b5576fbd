use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};
use env_logger::Env;
use tera::Tera;

use catalog_agent::categorizer::{CategoryMatcher, Taxonomy};
use catalog_agent::db::{establish_connection_pool, run_migrations};
use catalog_agent::gateway::{HuggingFaceGateway, ModelGateway};
use catalog_agent::models::config::ServerConfig;
use catalog_agent::pipeline::ListingPipeline;
use catalog_agent::repository::DieselRepository;
use catalog_agent::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(server_config.database_path()) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = run_migrations(&pool) {
        log::error!("{e}");
        std::process::exit(1);
    }
    let repo = DieselRepository::new(pool);

    let matcher = match Taxonomy::from_path(&server_config.taxonomy_path)
        .and_then(|taxonomy| CategoryMatcher::new(&taxonomy))
    {
        Ok(matcher) => Arc::new(matcher),
        Err(e) => {
            log::error!(
                "Failed to load taxonomy from {}: {e}",
                server_config.taxonomy_path
            );
            std::process::exit(1);
        }
    };

    let gateway: Arc<dyn ModelGateway> = match HuggingFaceGateway::new(&server_config.models) {
        Ok(gateway) => Arc::new(gateway),
        Err(e) => {
            log::error!("Failed to configure model gateway: {e}");
            std::process::exit(1);
        }
    };
    let pipeline = ListingPipeline::new(gateway, matcher);

    let tera = match Tera::new(&server_config.templates_dir) {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Serving catalog agent on {}:{}",
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(pipeline.clone()))
            .app_data(web::Data::new(tera.clone()))
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
