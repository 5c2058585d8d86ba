//! Transactional email for shipment notifications.
//!
//! Uses SMTP via lettre for delivery with Askama HTML templates. Every
//! message is multipart: plain text plus HTML, both in Italian.

use askama::Template;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{MultiPart, SinglePart, header::ContentType},
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use secrecy::ExposeSecret;
use thiserror::Error;

use crate::config::EmailConfig;

/// HTML template for the customer shipment notification.
#[derive(Template)]
#[template(path = "email/shipment_notification.html")]
struct ShipmentNotificationHtml<'a> {
    customer_name: &'a str,
    order_id: &'a str,
    tracking_code: &'a str,
    courier: &'a str,
    courier_link: &'a str,
}

/// Plain text template for the customer shipment notification.
#[derive(Template)]
#[template(path = "email/shipment_notification.txt")]
struct ShipmentNotificationText<'a> {
    customer_name: &'a str,
    order_id: &'a str,
    tracking_code: &'a str,
    courier: &'a str,
    courier_link: &'a str,
}

/// Errors that can occur when sending email.
#[derive(Debug, Error)]
pub enum EmailError {
    /// SMTP transport error.
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    /// Failed to build email message.
    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Email service for sending transactional emails.
#[derive(Clone)]
pub struct EmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl EmailService {
    /// Create a new email service from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the SMTP relay cannot be configured.
    pub fn new(config: &EmailConfig) -> Result<Self, SmtpError> {
        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.expose_secret().to_string(),
        );

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            mailer,
            from_address: config.from_address.clone(),
        })
    }

    /// Send the shipment tracking email to the customer.
    ///
    /// # Errors
    ///
    /// Returns error if email fails to send or a template fails to render.
    pub async fn send_shipment_notification(
        &self,
        to: &str,
        customer_name: &str,
        order_id: &str,
        tracking_code: &str,
        courier: &str,
        courier_link: Option<&str>,
    ) -> Result<(), EmailError> {
        let courier_link = courier_link.unwrap_or("");

        let html = ShipmentNotificationHtml {
            customer_name,
            order_id,
            tracking_code,
            courier,
            courier_link,
        }
        .render()?;
        let text = ShipmentNotificationText {
            customer_name,
            order_id,
            tracking_code,
            courier,
            courier_link,
        }
        .render()?;

        self.send_multipart_email(
            to,
            &format!("Il tuo ordine {order_id} \u{e8} stato spedito - Bottega del Macellaio"),
            &text,
            &html,
        )
        .await
    }

    /// Send a multipart email with both plain text and HTML versions.
    async fn send_multipart_email(
        &self,
        to: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), EmailError> {
        let email = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| EmailError::InvalidAddress(self.from_address.clone()))?,
            )
            .to(to
                .parse()
                .map_err(|_| EmailError::InvalidAddress(to.to_string()))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )?;

        self.mailer.send(email).await?;

        tracing::info!(to = %to, subject = %subject, "Email sent successfully");
        Ok(())
    }
}
