use std::io::ErrorKind;
use std::path::Path;
use yearbook_core::{DirectoryError, MailError};

/// Map directory loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_directory_error(error: &DirectoryError, path: &Path) -> (String, String, String) {
    match error {
        DirectoryError::Io { source, .. } if source.kind() == ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "The file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPlease verify the file exists and you have permission to read it.",
                path.display()
            ),
        ),
        DirectoryError::Io { source, .. } if source.kind() == ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", path.display()),
        ),
        DirectoryError::Io { source, .. } => (
            "Error Loading File".to_string(),
            "Failed to read school directory file.".to_string(),
            source.to_string(),
        ),
        DirectoryError::Json { source, .. } => (
            "Invalid JSON".to_string(),
            "The school directory is not valid JSON.".to_string(),
            format!("{} (line {}, column {})", source, source.line(), source.column()),
        ),
        DirectoryError::Schema(errors) => (
            "Schema Error".to_string(),
            "The school directory does not match the expected format.".to_string(),
            numbered(errors),
        ),
        DirectoryError::Validation(errors) => (
            "Validation Error".to_string(),
            "The school directory has validation errors.".to_string(),
            numbered(errors),
        ),
    }
}

/// Map email delivery errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_mail_error(error: &MailError) -> (String, String, String) {
    match error {
        MailError::MissingCredentials => (
            "Email Not Configured".to_string(),
            "Email delivery is enabled but credentials are missing.".to_string(),
            "Set RESEND_API_KEY and RESEND_FROM_EMAIL, or unset YEARBOOK_EMAIL_ENABLED."
                .to_string(),
        ),
        MailError::Transport(e) => (
            "Email Delivery Failed".to_string(),
            "Could not reach the email service.".to_string(),
            e.to_string(),
        ),
        MailError::Rejected { status, message } => (
            "Email Rejected".to_string(),
            format!("The email service refused the message (HTTP {}).", status),
            message.clone(),
        ),
    }
}

fn numbered(errors: &[String]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, e)| format!("{}. {}", i + 1, e))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_not_found() {
        let error = DirectoryError::Io {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(ErrorKind::NotFound, "gone"),
        };

        let (title, _, details) = map_directory_error(&error, Path::new("missing.json"));
        assert_eq!(title, "File Not Found");
        assert!(details.contains("missing.json"));
    }

    #[test]
    fn test_permission_denied() {
        let error = DirectoryError::Io {
            path: PathBuf::from("locked.json"),
            source: std::io::Error::new(ErrorKind::PermissionDenied, "nope"),
        };

        let (title, _, _) = map_directory_error(&error, Path::new("locked.json"));
        assert_eq!(title, "Permission Denied");
    }

    #[test]
    fn test_validation_errors_are_numbered() {
        let error = DirectoryError::Validation(vec!["first".to_string(), "second".to_string()]);

        let (title, _, details) = map_directory_error(&error, Path::new("schools.json"));
        assert_eq!(title, "Validation Error");
        assert_eq!(details, "1. first\n2. second");
    }

    #[test]
    fn test_json_error_reports_position() {
        let source = serde_json::from_str::<serde_json::Value>("{\n  oops").unwrap_err();
        let error = DirectoryError::Json {
            path: PathBuf::from("schools.json"),
            source,
        };

        let (title, _, details) = map_directory_error(&error, Path::new("schools.json"));
        assert_eq!(title, "Invalid JSON");
        assert!(details.contains("line 2"));
    }

    #[test]
    fn test_mail_errors() {
        let (title, _, _) = map_mail_error(&MailError::MissingCredentials);
        assert_eq!(title, "Email Not Configured");

        let (_, message, details) = map_mail_error(&MailError::Rejected {
            status: 422,
            message: "invalid recipient".to_string(),
        });
        assert!(message.contains("422"));
        assert_eq!(details, "invalid recipient");
    }
}
