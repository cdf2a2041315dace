use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use page_quiz_relay::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env()
        .and_then(|config| config.validate().map(|_| config))
        .map_err(|e| {
            log::error!("{}", e);
            std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
        })?;

    let state = AppState::new(config.clone()).await.map_err(|e| {
        log::error!("Failed to initialise application state: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    log::info!(
        "Starting HTTP server on {}:{} (project {}, model {})",
        config.web_server_host,
        config.web_server_port,
        config.gcp_project,
        config.model_name
    );

    let max_payload_bytes = config.max_payload_bytes;
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(handlers::json_config(max_payload_bytes))
            .wrap(Cors::permissive())
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(r#"%a "%r" %s %b %{x-request-id}o %Ts"#))
            .configure(handlers::configure)
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}
