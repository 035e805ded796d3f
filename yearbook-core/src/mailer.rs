//! Outbound email.
//!
//! Delivery is a strategy chosen at start-up: [`LoggingMailer`] records what
//! would have been sent, [`ResendMailer`] hands the message to the Resend
//! transactional email API.

use crate::error::MailError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::time::Duration;
use tracing::{error, info};

pub const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
}

impl EmailMessage {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            html: html.into(),
        }
    }

    /// Account verification mail pointing at `link`
    pub fn verification(to: impl Into<String>, link: &str) -> Self {
        Self::new(
            to,
            "Verify your email address",
            format!(
                "<p>Welcome to the yearbook!</p>\
                 <p>Confirm your email address by opening the link below:</p>\
                 <p><a href=\"{link}\">{link}</a></p>\
                 <p>If you did not create an account you can ignore this message.</p>"
            ),
        )
    }

    /// Password reset mail pointing at `link`
    pub fn password_reset(to: impl Into<String>, link: &str) -> Self {
        Self::new(
            to,
            "Reset your Password",
            format!(
                "<p>A password reset was requested for your account.</p>\
                 <p><a href=\"{link}\">{link}</a></p>\
                 <p>If this wasn't you, no action is needed.</p>"
            ),
        )
    }

    pub fn kind(&self) -> EmailKind {
        EmailKind::from_subject(&self.subject)
    }
}

/// Coarse category of a message, derived from its subject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailKind {
    Verification,
    PasswordReset,
    Notification,
}

impl EmailKind {
    pub fn from_subject(subject: &str) -> Self {
        if subject.contains("Verify") {
            EmailKind::Verification
        } else if subject.contains("Password") {
            EmailKind::PasswordReset
        } else {
            EmailKind::Notification
        }
    }
}

impl fmt::Display for EmailKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EmailKind::Verification => "verification",
            EmailKind::PasswordReset => "password_reset",
            EmailKind::Notification => "notification",
        };
        write!(f, "{}", name)
    }
}

/// What the delivery strategy did with a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryReceipt {
    /// Delivery is switched off; the message was only logged
    Suppressed,
    Sent { id: Option<String> },
}

pub trait Mailer {
    fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, MailError>;
}

/// Mailer used while delivery is disabled
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingMailer;

impl Mailer for LoggingMailer {
    fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, MailError> {
        info!(
            to = %message.to,
            subject = %message.subject,
            email_type = %message.kind(),
            "Email delivery disabled, would send"
        );
        Ok(DeliveryReceipt::Suppressed)
    }
}

#[derive(Debug, Serialize)]
struct ResendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct ResendResponse {
    id: Option<String>,
}

/// Mailer backed by the Resend HTTP API
pub struct ResendMailer {
    client: reqwest::blocking::Client,
    api_key: String,
    from_email: String,
    endpoint: String,
}

impl ResendMailer {
    pub fn new(
        api_key: impl Into<String>,
        from_email: impl Into<String>,
    ) -> Result<Self, MailError> {
        let api_key = api_key.into();
        let from_email = from_email.into();
        if api_key.trim().is_empty() || from_email.trim().is_empty() {
            return Err(MailError::MissingCredentials);
        }

        Ok(Self {
            client: build_client(false)?,
            api_key,
            from_email,
            endpoint: RESEND_ENDPOINT.to_string(),
        })
    }

    /// Point the mailer at a different API URL, e.g. a local relay
    /// Loopback relays are contacted directly, bypassing any system proxy
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Result<Self, MailError> {
        let endpoint = endpoint.into();
        if is_loopback(&endpoint) {
            self.client = build_client(true)?;
        }
        self.endpoint = endpoint;
        Ok(self)
    }

    pub fn from_email(&self) -> &str {
        &self.from_email
    }

    fn deliver(&self, message: &EmailMessage) -> Result<DeliveryReceipt, MailError> {
        let body = ResendRequest {
            from: &self.from_email,
            to: [message.to.as_str()],
            subject: &message.subject,
            html: &message.html,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let reason = response.text().unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                message: reason,
            });
        }

        let parsed: ResendResponse = response.json()?;
        Ok(DeliveryReceipt::Sent { id: parsed.id })
    }
}

fn build_client(direct: bool) -> Result<reqwest::blocking::Client, MailError> {
    let mut builder = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(10))
        .user_agent(concat!("yearbook/", env!("CARGO_PKG_VERSION")));
    if direct {
        builder = builder.no_proxy();
    }
    Ok(builder.build()?)
}

fn is_loopback(endpoint: &str) -> bool {
    reqwest::Url::parse(endpoint)
        .ok()
        .and_then(|url| {
            url.host_str().map(|host| {
                let host = host.trim_start_matches('[').trim_end_matches(']');
                host.eq_ignore_ascii_case("localhost")
                    || host.parse::<IpAddr>().map(|ip| ip.is_loopback()).unwrap_or(false)
            })
        })
        .unwrap_or(false)
}

impl Mailer for ResendMailer {
    fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, MailError> {
        match self.deliver(message) {
            Ok(receipt) => {
                if let DeliveryReceipt::Sent { id } = &receipt {
                    info!(
                        to = %message.to,
                        subject = %message.subject,
                        email_id = id.as_deref().unwrap_or("unknown"),
                        "Email sent successfully"
                    );
                }
                Ok(receipt)
            }
            Err(e) => {
                error!(
                    to = %message.to,
                    subject = %message.subject,
                    error = %e,
                    "Failed to send email"
                );
                Err(e)
            }
        }
    }
}

/// Delivery switch and credentials, read once at start-up
#[derive(Debug, Clone, Default)]
pub struct EmailSettings {
    pub enabled: bool,
    pub api_key: Option<String>,
    pub from_email: Option<String>,
}

/// Pick the delivery strategy for the given settings
pub fn build_mailer(settings: &EmailSettings) -> Result<Box<dyn Mailer>, MailError> {
    if !settings.enabled {
        return Ok(Box::new(LoggingMailer));
    }

    match (&settings.api_key, &settings.from_email) {
        (Some(api_key), Some(from_email)) => Ok(Box::new(ResendMailer::new(api_key, from_email)?)),
        _ => Err(MailError::MissingCredentials),
    }
}
