//! HTTP route handlers

use actix_web::web;

pub mod health;
pub mod otp;

/// Register all application routes
///
/// Paths are flat, with no version prefix; the login page calls them
/// directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/issue-otp", web::post().to(otp::issue_otp))
        .route("/verify-otp", web::post().to(otp::verify_otp))
        .route("/health", web::get().to(health::health_check));
}
