use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading or writing a school directory file
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Schema validation failed:\n{}", .0.join("\n"))]
    Schema(Vec<String>),

    #[error("Validation failed:\n{}", .0.join("\n"))]
    Validation(Vec<String>),
}

/// Failure while handing an email to the delivery service
#[derive(Error, Debug)]
pub enum MailError {
    #[error("Resend credentials not configured. Please set RESEND_API_KEY and RESEND_FROM_EMAIL environment variables.")]
    MissingCredentials,

    #[error("Email transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Email rejected: HTTP {status}: {message}")]
    Rejected { status: u16, message: String },
}
