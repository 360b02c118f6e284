use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::info;

use trip_planner_api::{config::AppConfig, routes, services::upstream_client::UpstreamClient};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    info!(
        "Starting search proxy on {}:{} (upstream {})",
        config.host, config.port, config.search_api_base_url
    );

    let upstream = UpstreamClient::new(config.search_api_base_url.clone(), config.upstream_timeout)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let bind = (config.host.clone(), config.port);
    let config = web::Data::new(config);
    let upstream = web::Data::new(upstream);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(config.clone())
            .app_data(upstream.clone())
            .configure(routes::configure)
    })
    .bind(bind)?
    .run()
    .await
}
