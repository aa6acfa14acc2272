pub mod config;
pub mod error;
pub mod handlers;
pub mod helpers;
pub mod models;

use actix_web::web;
use error::AppError;

/// Register the `/api` routes.
///
/// Malformed JSON bodies are reported as `invalid_request` errors.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into()),
    )
    .service(
        web::scope("/api")
            .service(handlers::health::health_check)
            .service(handlers::health::version_info)
            .service(handlers::projects::list_projects)
            .service(handlers::projects::create_project)
            .service(handlers::projects::get_project)
            .service(handlers::projects::update_project)
            .service(handlers::projects::remix_project),
    );
}
