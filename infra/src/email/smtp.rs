//! SMTP Mailer Implementation
//!
//! Delivers one-time passcodes over SMTP using lettre's async transport.
//! The transport is built once from configuration; connectivity problems
//! surface through the probe and through individual send attempts.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use mo_core::errors::DeliveryError;
use mo_core::services::Mailer;
use mo_shared::config::email::EmailConfig;
use mo_shared::utils::mask_email;

use crate::InfrastructureError;

/// Subject line for passcode emails
const OTP_SUBJECT: &str = "Your OTP for Login";

/// Mailer backed by an SMTP relay
pub struct SmtpMailer {
    /// Async SMTP transport over implicit TLS
    transport: AsyncSmtpTransport<Tokio1Executor>,
    /// Sender mailbox shown to recipients
    from: Mailbox,
}

impl SmtpMailer {
    /// Create a new SMTP mailer from configuration
    ///
    /// Builds the transport without connecting; the relay is first
    /// contacted by the startup probe. Fails only on a malformed sender
    /// address or relay hostname.
    pub fn new(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        let from = config.from_address.parse::<Mailbox>()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn probe(&self) -> Result<(), DeliveryError> {
        match self.transport.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(DeliveryError::Connect(
                "SMTP server rejected the connection test".to_string(),
            )),
            Err(e) => Err(DeliveryError::Connect(e.to_string())),
        }
    }

    async fn send_otp(&self, to: &str, code: &str) -> Result<String, DeliveryError> {
        let recipient = to
            .parse::<Mailbox>()
            .map_err(|e| DeliveryError::Send(format!("invalid recipient address: {}", e)))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(recipient)
            .subject(OTP_SUBJECT)
            .header(ContentType::TEXT_HTML)
            .body(render_otp_body(code))
            .map_err(|e| DeliveryError::Send(format!("failed to build message: {}", e)))?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| DeliveryError::Send(e.to_string()))?;

        let message_id = response.message().collect::<Vec<&str>>().join(" ");

        debug!(
            email = %mask_email(to),
            event = "smtp_send_accepted",
            "SMTP server accepted the message"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "SMTP"
    }
}

/// Render the HTML body of a passcode email
fn render_otp_body(code: &str) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 500px; margin: 0 auto;">
    <h2 style="color: #333;">Your One-Time Password (OTP)</h2>
    <p>Use the following OTP to complete your login:</p>
    <div style="text-align: center; margin: 20px 0;">
        <span style="font-size: 24px; font-weight: bold; letter-spacing: 5px;
                     background-color: #f5f5f5; padding: 10px 15px;
                     border-radius: 5px;">{code}</span>
    </div>
    <p>This OTP is valid for 5 minutes. Do not share it with anyone.</p>
    <hr style="border: none; border-top: 1px solid #eee; margin: 20px 0;">
    <p style="color: #777; font-size: 12px;">
        If you didn't request this OTP, please ignore this email.
    </p>
</div>"#
    )
}
