//! Health check endpoint

use actix_web::{web, HttpResponse};

use crate::dto::health::HealthResponse;
use crate::state::AppState;

/// Handler for `GET /health`
///
/// Always returns 200 while the process is up. The two email flags let a
/// client distinguish a server without mail credentials from one whose
/// credentials failed the connectivity probe.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
        email_configured: state.email_configured,
        email_connected: state.gate.is_healthy(),
    })
}
