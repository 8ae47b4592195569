//! CORS middleware configuration for cross-origin requests.
//!
//! The login page is typically served from a different origin than the
//! API, so cross-origin requests must be allowed. The configuration is
//! environment-aware: development permits any origin for easy local
//! testing, production restricts origins to a configured list.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

use mo_shared::config::Environment;

/// Creates a CORS middleware instance configured for the current environment.
///
/// # Environment Variables
/// - `ENVIRONMENT`: Set to "production" for production settings
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins (production only)
/// - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)
pub fn create_cors() -> Cors {
    let environment = Environment::from_env();
    let max_age = env::var("CORS_MAX_AGE")
        .unwrap_or_else(|_| "3600".to_string())
        .parse::<usize>()
        .unwrap_or(3600);

    if environment.is_production() {
        create_production_cors(max_age)
    } else {
        create_development_cors(max_age)
    }
}

/// Creates CORS configuration for development environment.
///
/// Permissive so the login page can be served from any local port or
/// opened straight from disk.
fn create_development_cors(max_age: usize) -> Cors {
    tracing::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE, header::ORIGIN])
        .max_age(max_age)
}

/// Creates CORS configuration for production environment.
///
/// Only origins listed in `ALLOWED_ORIGINS` may call the API.
fn create_production_cors(max_age: usize) -> Cors {
    tracing::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(max_age);

    if let Ok(allowed_origins) = env::var("ALLOWED_ORIGINS") {
        for origin in allowed_origins.split(',').map(|s| s.trim()) {
            if !origin.is_empty() {
                tracing::info!("Adding allowed origin: {}", origin);
                cors = cors.allowed_origin(origin);
            }
        }
    }

    cors
}
