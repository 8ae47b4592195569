//! MailOtp API server entry point
//!
//! Wires the OTP service together from its seams: the in-memory store,
//! the configured mailer behind the delivery gate, the OS CSPRNG code
//! generator and the system clock. The mail channel is probed once here;
//! a failed probe leaves the server running in on-screen display mode.

use std::sync::Arc;

use actix_web::{App, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn, Level};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use mo_api::middleware::cors::create_cors;
use mo_api::routes;
use mo_api::state::AppState;
use mo_core::services::{
    DeliveryGate, OsRngCodeGenerator, OtpService, OtpServiceConfig, SystemClock,
};
use mo_infra::email::create_mailer;
use mo_infra::store::MemoryOtpStore;
use mo_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Structured logging initialisation
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    info!("Starting MailOtp API server");

    let config = AppConfig::from_env();

    if config.email.username.is_empty() {
        warn!("EMAIL_USER not set in .env file");
    }
    if config.email.password.is_empty() {
        warn!("EMAIL_PASS not set in .env file");
    }

    // Wire the delivery side
    let mailer = create_mailer(&config.email);
    let gate = Arc::new(DeliveryGate::new(
        mailer,
        config.email.probe_timeout(),
        config.email.send_timeout(),
    ));

    // Probe mail connectivity once; the server starts either way
    gate.startup_probe().await;

    // Wire the OTP service
    let store = Arc::new(MemoryOtpStore::new());
    let otp_service = Arc::new(OtpService::new(
        store,
        gate.clone(),
        Arc::new(OsRngCodeGenerator::new()),
        Arc::new(SystemClock::new()),
        OtpServiceConfig {
            ttl_secs: config.otp.ttl_secs as i64,
        },
    ));

    let app_state = actix_web::web::Data::new(AppState {
        otp_service,
        gate,
        email_configured: config.email.is_configured(),
    });

    let bind_address = config.server.bind_address();
    info!("Server running on http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(TracingLogger::default())
            .wrap(create_cors())
            .configure(routes::configure)
    })
    .bind(&bind_address)
    .with_context(|| format!("failed to bind {}", bind_address))?
    .run()
    .await?;

    Ok(())
}
