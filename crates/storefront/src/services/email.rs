//! Transactional email for orders and pickup reservations.
//!
//! Uses SMTP via lettre for delivery with Askama HTML templates. Every
//! message is multipart: plain text plus HTML, both in Italian.

use askama::Template;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{MultiPart, SinglePart, header::ContentType},
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use rust_decimal::Decimal;
use secrecy::ExposeSecret;
use thiserror::Error;

use bottega_core::{Address, LineItem, OrderTotals, Reservation};

use crate::config::EmailConfig;

/// One line of an order as rendered in email bodies.
#[derive(Debug, Clone)]
pub struct EmailLine {
    pub name: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Build the renderable line rows for an order.
#[must_use]
pub fn email_lines(line_items: &[LineItem]) -> Vec<EmailLine> {
    line_items
        .iter()
        .map(|item| EmailLine {
            name: item.name.clone(),
            quantity: item.quantity,
            line_total: eur(item.line_total()),
        })
        .collect()
}

/// Format an amount as a euro string with two decimals.
fn eur(amount: Decimal) -> String {
    format!("\u{20ac}{amount:.2}")
}

/// HTML template for the customer order confirmation.
#[derive(Template)]
#[template(path = "email/order_confirmation.html")]
struct OrderConfirmationHtml<'a> {
    customer_name: &'a str,
    order_id: &'a str,
    lines: &'a [EmailLine],
    subtotal: &'a str,
    shipping: &'a str,
    total: &'a str,
}

/// Plain text template for the customer order confirmation.
#[derive(Template)]
#[template(path = "email/order_confirmation.txt")]
struct OrderConfirmationText<'a> {
    customer_name: &'a str,
    order_id: &'a str,
    lines: &'a [EmailLine],
    subtotal: &'a str,
    shipping: &'a str,
    total: &'a str,
}

/// HTML template for the shop-facing new-order notification.
#[derive(Template)]
#[template(path = "email/order_notification.html")]
struct OrderNotificationHtml<'a> {
    order_id: &'a str,
    customer: &'a Address,
    notes: &'a str,
    lines: &'a [EmailLine],
    subtotal: &'a str,
    shipping: &'a str,
    total: &'a str,
}

/// Plain text template for the shop-facing new-order notification.
#[derive(Template)]
#[template(path = "email/order_notification.txt")]
struct OrderNotificationText<'a> {
    order_id: &'a str,
    customer: &'a Address,
    notes: &'a str,
    lines: &'a [EmailLine],
    subtotal: &'a str,
    shipping: &'a str,
    total: &'a str,
}

/// HTML template for the shop-facing reservation notification.
#[derive(Template)]
#[template(path = "email/reservation_notification.html")]
struct ReservationNotificationHtml<'a> {
    customer_name: &'a str,
    customer_phone: &'a str,
    product_list: &'a str,
    pickup_date: &'a str,
    pickup_time: &'a str,
}

/// Plain text template for the shop-facing reservation notification.
#[derive(Template)]
#[template(path = "email/reservation_notification.txt")]
struct ReservationNotificationText<'a> {
    customer_name: &'a str,
    customer_phone: &'a str,
    product_list: &'a str,
    pickup_date: &'a str,
    pickup_time: &'a str,
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
    shop_address: String,
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
            shop_address: config.shop_address.clone(),
        })
    }

    /// Send the order confirmation to the customer.
    ///
    /// # Errors
    ///
    /// Returns error if email fails to send or a template fails to render.
    pub async fn send_order_confirmation(
        &self,
        to: &str,
        order_id: &str,
        customer_name: &str,
        line_items: &[LineItem],
        totals: &OrderTotals,
    ) -> Result<(), EmailError> {
        let lines = email_lines(line_items);
        let subtotal = eur(totals.subtotal);
        let shipping = eur(totals.shipping_cost);
        let total = eur(totals.total);

        let html = OrderConfirmationHtml {
            customer_name,
            order_id,
            lines: &lines,
            subtotal: &subtotal,
            shipping: &shipping,
            total: &total,
        }
        .render()?;
        let text = OrderConfirmationText {
            customer_name,
            order_id,
            lines: &lines,
            subtotal: &subtotal,
            shipping: &shipping,
            total: &total,
        }
        .render()?;

        self.send_multipart_email(
            to,
            &format!("Conferma ordine {order_id} - Bottega del Macellaio"),
            &text,
            &html,
        )
        .await
    }

    /// Send the new-order notification to the shop mailbox.
    ///
    /// # Errors
    ///
    /// Returns error if email fails to send or a template fails to render.
    pub async fn send_order_notification(
        &self,
        order_id: &str,
        customer: &Address,
        line_items: &[LineItem],
        totals: &OrderTotals,
    ) -> Result<(), EmailError> {
        let lines = email_lines(line_items);
        let subtotal = eur(totals.subtotal);
        let shipping = eur(totals.shipping_cost);
        let total = eur(totals.total);
        let notes = customer.notes.as_deref().unwrap_or("");

        let html = OrderNotificationHtml {
            order_id,
            customer,
            notes,
            lines: &lines,
            subtotal: &subtotal,
            shipping: &shipping,
            total: &total,
        }
        .render()?;
        let text = OrderNotificationText {
            order_id,
            customer,
            notes,
            lines: &lines,
            subtotal: &subtotal,
            shipping: &shipping,
            total: &total,
        }
        .render()?;

        self.send_multipart_email(
            &self.shop_address,
            &format!("Nuovo ordine {order_id}"),
            &text,
            &html,
        )
        .await
    }

    /// Send the new-reservation notification to the shop mailbox.
    ///
    /// # Errors
    ///
    /// Returns error if email fails to send or a template fails to render.
    pub async fn send_reservation_notification(
        &self,
        reservation: &Reservation,
    ) -> Result<(), EmailError> {
        let html = ReservationNotificationHtml {
            customer_name: &reservation.customer_name,
            customer_phone: &reservation.customer_phone,
            product_list: &reservation.product_list,
            pickup_date: &reservation.pickup_date,
            pickup_time: &reservation.pickup_time,
        }
        .render()?;
        let text = ReservationNotificationText {
            customer_name: &reservation.customer_name,
            customer_phone: &reservation.customer_phone,
            product_list: &reservation.product_list,
            pickup_date: &reservation.pickup_date,
            pickup_time: &reservation.pickup_time,
        }
        .render()?;

        self.send_multipart_email(
            &self.shop_address,
            &format!(
                "Nuova prenotazione ritiro - {} {}",
                reservation.pickup_date, reservation.pickup_time
            ),
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

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_item() -> LineItem {
        LineItem {
            product_id: "tagliata-di-asino".to_owned(),
            name: "Tagliata di asino".to_owned(),
            unit_price: Decimal::new(195, 1),
            weight_per_unit: Decimal::new(5, 1),
            quantity: 2,
        }
    }

    #[test]
    fn test_eur_formats_two_decimals() {
        assert_eq!(eur(Decimal::from(15)), "\u{20ac}15.00");
        assert_eq!(eur(Decimal::new(412, 1)), "\u{20ac}41.20");
        assert_eq!(eur(Decimal::ZERO), "\u{20ac}0.00");
    }

    #[test]
    fn test_email_lines_render_quantities_and_totals() {
        let lines = email_lines(&[sample_item()]);
        assert_eq!(lines.len(), 1);
        let line = lines.first().unwrap();
        assert_eq!(line.name, "Tagliata di asino");
        assert_eq!(line.quantity, 2);
        assert_eq!(line.line_total, "\u{20ac}39.00");
    }

    #[test]
    fn test_order_confirmation_template_renders() {
        let lines = email_lines(&[sample_item()]);
        let html = OrderConfirmationHtml {
            customer_name: "Giulia Ferri",
            order_id: "3f9c2a1b",
            lines: &lines,
            subtotal: "\u{20ac}39.00",
            shipping: "\u{20ac}15.00",
            total: "\u{20ac}54.00",
        }
        .render()
        .unwrap();
        assert!(html.contains("Giulia Ferri"));
        assert!(html.contains("3f9c2a1b"));
        assert!(html.contains("Tagliata di asino"));
        assert!(html.contains("\u{20ac}54.00"));
    }

    #[test]
    fn test_reservation_notification_template_renders() {
        let text = ReservationNotificationText {
            customer_name: "Paolo Greco",
            customer_phone: "333 1234567",
            product_list: "2 kg di pezzetti di cavallo",
            pickup_date: "2025-03-07",
            pickup_time: "09:30",
        }
        .render()
        .unwrap();
        assert!(text.contains("Paolo Greco"));
        assert!(text.contains("2025-03-07"));
        assert!(text.contains("09:30"));
    }
}
