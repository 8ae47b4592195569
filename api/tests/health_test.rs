//! Integration tests for the health endpoint

#[cfg(test)]
mod health_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::Value;

    use mo_api::routes;
    use mo_api::state::AppState;
    use mo_core::services::{
        DeliveryGate, OsRngCodeGenerator, OtpService, OtpServiceConfig, SystemClock,
    };
    use mo_infra::email::MockMailer;
    use mo_infra::store::MemoryOtpStore;

    /// Helper to build application state with a probed gate
    async fn test_state(mailer: MockMailer, email_configured: bool) -> web::Data<AppState> {
        let gate = Arc::new(DeliveryGate::new(
            Arc::new(mailer),
            Duration::from_secs(5),
            Duration::from_secs(10),
        ));
        gate.startup_probe().await;

        let otp_service = Arc::new(OtpService::new(
            Arc::new(MemoryOtpStore::new()),
            gate.clone(),
            Arc::new(OsRngCodeGenerator::new()),
            Arc::new(SystemClock::new()),
            OtpServiceConfig::default(),
        ));

        web::Data::new(AppState {
            otp_service,
            gate,
            email_configured,
        })
    }

    async fn get_health(state: web::Data<AppState>) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_health_reports_connected_channel() {
        let state = test_state(MockMailer::with_options(false, false), true).await;
        let (status, body) = get_health(state).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
        assert_eq!(body["message"], "Server is running");
        assert_eq!(body["emailConfigured"], true);
        assert_eq!(body["emailConnected"], true);
    }

    #[actix_web::test]
    async fn test_health_reports_failed_probe() {
        // Credentials present but the mail server is unreachable
        let state = test_state(MockMailer::failing(), true).await;
        let (status, body) = get_health(state).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["emailConfigured"], true);
        assert_eq!(body["emailConnected"], false);
    }

    #[actix_web::test]
    async fn test_health_reports_missing_credentials() {
        let state = test_state(MockMailer::with_options(false, false), false).await;
        let (status, body) = get_health(state).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["emailConfigured"], false);
        assert_eq!(body["emailConnected"], true);
    }
}
