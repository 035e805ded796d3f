use anyhow::{anyhow, bail, Result};
use colored::Colorize;
use uuid::Uuid;
use yearbook_core::{build_mailer, build_verifier, DeliveryReceipt, VerificationStatus};

use crate::config::AppConfig;
use crate::errors::map_mail_error;
use crate::ui::print_error;

/// Start verification for an address with the strategies the configuration selects
pub fn handle_verify_email(config: &AppConfig, email: &str) -> Result<()> {
    let email = email.trim();
    if !looks_like_email(email) {
        bail!("'{}' is not a valid email address", email);
    }

    let mailer = build_mailer(&config.email).map_err(|e| report(&e))?;
    let verifier = build_verifier(config.features.email_verification, mailer, &config.base_url);

    let token = Uuid::new_v4().simple().to_string();
    match verifier.begin(email, &token).map_err(|e| report(&e))? {
        VerificationStatus::Verified => {
            println!(
                "{} Email verification is disabled; {} is verified automatically.",
                "✓".green().bold(),
                email
            );
        }
        VerificationStatus::Pending { link, receipt } => {
            match receipt {
                DeliveryReceipt::Sent { id } => println!(
                    "{} Verification email sent to {} (id: {})",
                    "✓".green().bold(),
                    email,
                    id.as_deref().unwrap_or("unknown")
                ),
                DeliveryReceipt::Suppressed => println!(
                    "{} Email delivery is disabled; the verification email was logged, not sent.",
                    "!".yellow().bold()
                ),
            }
            println!("Verification link: {}", link);
        }
    }

    Ok(())
}

fn report(error: &yearbook_core::MailError) -> anyhow::Error {
    let (title, message, details) = map_mail_error(error);
    print_error(&title, &message, &details);
    anyhow!("{}", message)
}

/// Minimal shape check: one '@' with text on both sides and a dot in the domain
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}
