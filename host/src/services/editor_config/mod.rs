//! Hands the editor configuration to the frontend.
//!
//! The frontend has no build-time knowledge of where the type inference
//! backend lives; it asks the host on startup.
//!
//! - `GET /config`: returns the `EditorConfig` registered as app data, as JSON.

use actix_web::web::{get, scope};
use actix_web::Scope;
use common::config::CONFIG_PATH;

mod get;

pub fn configure_routes() -> Scope {
    scope(CONFIG_PATH).route("", get().to(get::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};
    use common::config::EditorConfig;

    #[actix_web::test]
    async fn serves_the_injected_config() {
        let config = EditorConfig {
            backend_url: "http://types.internal:9000".into(),
            request_timeout_ms: 500,
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/config").to_request();
        let body: EditorConfig = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, config);
    }

    #[actix_web::test]
    async fn only_get_is_routed() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(EditorConfig::default()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post().uri("/config").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_client_error());
    }
}
