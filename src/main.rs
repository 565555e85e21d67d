use std::sync::Arc;

use actix_web::{web::Data, App, HttpServer};
use actix_files as fs;
use log::{error, info};
use tera::Tera;

use khujai_web::config::Config;
use khujai_web::model::OpenRouterClient;
use khujai_web::video::YouTubeClient;
use khujai_web::web::{routes, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Khu Jai chat server");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize template engine
    let mut tera = match Tera::new(&format!("{}/**/*", config.template_dir)) {
        Ok(t) => t,
        Err(e) => {
            error!("Template parsing error: {}", e);
            std::process::exit(1);
        }
    };
    tera.autoescape_on(vec![".html"]);

    let app_state = Data::new(AppState {
        tera,
        locale: config.locale,
        completion: Arc::new(OpenRouterClient::new(
            config.openrouter_api_key.clone(),
            config.openrouter_base_url.clone(),
        )),
        videos: Arc::new(YouTubeClient::new(
            config.youtube_api_key.clone(),
            config.youtube_base_url.clone(),
        )),
    });

    info!(
        "Listening on {}:{} (locale: {})",
        config.host,
        config.port,
        config.locale.code()
    );

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(routes::configure)
            .service(fs::Files::new("/static", &static_dir))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
