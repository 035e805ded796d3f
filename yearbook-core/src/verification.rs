use crate::error::MailError;
use crate::mailer::{DeliveryReceipt, EmailMessage, Mailer};
use tracing::info;

/// Where an account stands after verification was started
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationStatus {
    /// Verification is switched off; the account counts as verified
    Verified,
    /// A link was handed to the mailer and awaits the user
    Pending { link: String, receipt: DeliveryReceipt },
}

pub trait AccountVerifier {
    fn begin(&self, email: &str, token: &str) -> Result<VerificationStatus, MailError>;
}

/// Verifier used while email verification is disabled
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoVerifier;

impl AccountVerifier for AutoVerifier {
    fn begin(&self, email: &str, _token: &str) -> Result<VerificationStatus, MailError> {
        info!(email, "Email verification disabled, account verified automatically");
        Ok(VerificationStatus::Verified)
    }
}

/// Sends a `<base_url>/verify-email/<token>` link through a mailer
pub struct EmailLinkVerifier {
    mailer: Box<dyn Mailer>,
    base_url: String,
}

impl EmailLinkVerifier {
    pub fn new(mailer: Box<dyn Mailer>, base_url: impl Into<String>) -> Self {
        Self {
            mailer,
            base_url: base_url.into(),
        }
    }

    pub fn verification_link(&self, token: &str) -> String {
        format!("{}/verify-email/{}", self.base_url.trim_end_matches('/'), token)
    }
}

impl AccountVerifier for EmailLinkVerifier {
    fn begin(&self, email: &str, token: &str) -> Result<VerificationStatus, MailError> {
        let link = self.verification_link(token);
        let receipt = self.mailer.send(&EmailMessage::verification(email, &link))?;
        Ok(VerificationStatus::Pending { link, receipt })
    }
}

/// Pick the verification strategy; the mailer is only kept when verification is on
pub fn build_verifier(
    enabled: bool,
    mailer: Box<dyn Mailer>,
    base_url: &str,
) -> Box<dyn AccountVerifier> {
    if enabled {
        Box::new(EmailLinkVerifier::new(mailer, base_url))
    } else {
        Box::new(AutoVerifier)
    }
}
