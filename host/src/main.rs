mod config;
mod services;

use crate::config::HostConfig;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = HostConfig::from_env();
    let url = config.url();

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url_clone) {
                warn!("Could not open a browser at {}: {}", url_clone, e);
            }
        });
    }

    info!("Server running at {}", url);
    info!("Type inference backend: {}", config.editor.backend_url);

    let editor_config = web::Data::new(config.editor.clone());
    HttpServer::new(move || {
        App::new()
            .app_data(editor_config.clone())
            .service(services::editor_config::configure_routes())
            .default_service(web::route().to(services::embedded::serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
