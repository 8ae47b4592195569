//! OTP issue and verify endpoints

use actix_web::{web, HttpResponse};
use tracing::{error, info};

use mo_core::errors::DomainError;
use mo_core::services::DeliveryOutcome;
use mo_shared::utils::mask_email;

use crate::dto::otp::{
    ErrorResponse, IssueOtpRequest, IssueOtpResponse, VerifyOtpRequest, VerifyOtpResponse,
};
use crate::state::AppState;

/// Handler for `POST /issue-otp`
///
/// Issues a fresh passcode for the given email address and hands it to
/// the delivery gate. Both delivery outcomes are 200 responses; the
/// passcode itself appears in the body only on the on-screen fallback.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// # Responses
///
/// ## Sent by email (200 OK)
/// ```json
/// { "message": "OTP sent successfully to your email", "method": "email" }
/// ```
///
/// ## On-screen fallback (200 OK)
/// ```json
/// { "message": "OTP generated successfully", "method": "display", "otp": "1234" }
/// ```
///
/// ## Missing email (400 Bad Request)
/// ```json
/// { "error": "Email is required" }
/// ```
pub async fn issue_otp(
    state: web::Data<AppState>,
    request: web::Json<IssueOtpRequest>,
) -> HttpResponse {
    // An absent or empty email is the same client mistake
    let email = match request.email.as_deref() {
        Some(email) if !email.is_empty() => email,
        _ => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Email is required".to_string(),
            });
        }
    };

    info!(email = %mask_email(email), "Processing issue-otp request");

    match state.otp_service.issue(email).await {
        Ok(outcome) => match outcome.delivery {
            DeliveryOutcome::SentByEmail { .. } => HttpResponse::Ok().json(IssueOtpResponse {
                message: "OTP sent successfully to your email".to_string(),
                method: "email".to_string(),
                otp: None,
            }),
            DeliveryOutcome::ShownOnScreen => HttpResponse::Ok().json(IssueOtpResponse {
                message: "OTP generated successfully".to_string(),
                method: "display".to_string(),
                otp: Some(outcome.code),
            }),
        },
        Err(e) => {
            error!(email = %mask_email(email), error = %e, "Failed to issue passcode");
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to process OTP request".to_string(),
            })
        }
    }
}

/// Handler for `POST /verify-otp`
///
/// Verifies a submitted passcode. All rejection reasons map to 400 with
/// a reason-specific error body; a verified passcode is consumed and
/// cannot be used again.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com", "otp": "1234" }
/// ```
///
/// # Responses
///
/// ## Verified (200 OK)
/// ```json
/// { "message": "OTP verified successfully" }
/// ```
///
/// ## Rejected (400 Bad Request)
/// ```json
/// { "error": "Invalid OTP" }
/// ```
pub async fn verify_otp(
    state: web::Data<AppState>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse {
    let (email, otp) = match (request.email.as_deref(), request.otp.as_deref()) {
        (Some(email), Some(otp)) if !email.is_empty() && !otp.is_empty() => (email, otp),
        _ => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Email and OTP are required".to_string(),
            });
        }
    };

    info!(email = %mask_email(email), "Processing verify-otp request");

    match state.otp_service.verify(email, otp).await {
        Ok(()) => HttpResponse::Ok().json(VerifyOtpResponse {
            message: "OTP verified successfully".to_string(),
        }),
        Err(DomainError::Otp(e)) => HttpResponse::BadRequest().json(ErrorResponse {
            error: e.to_string(),
        }),
        Err(e) => {
            error!(email = %mask_email(email), error = %e, "Failed to verify passcode");
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to process OTP request".to_string(),
            })
        }
    }
}
