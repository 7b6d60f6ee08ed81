use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Archive operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Logo state error on instance '{instance}': {message}")]
    LogoStateError { instance: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SiteError::HttpError(_) => ErrorSeverity::Medium,
            SiteError::ConfigError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::SerializationError(_) => ErrorSeverity::High,
            SiteError::IoError(_) | SiteError::ZipError(_) => ErrorSeverity::Critical,
            SiteError::LogoStateError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SiteError::ZipError(_) => "Disable [output.archive] or check free disk space",
            SiteError::HttpError(_) => {
                "Check network access, or build without --probe-logo to defer logo loading to the browser"
            }
            SiteError::IoError(_) => "Check that the output directory exists and is writable",
            SiteError::SerializationError(_) => "Re-run with --verbose and report the manifest contents",
            SiteError::ConfigError { .. } => "Make sure the config file exists and is valid TOML",
            SiteError::InvalidConfigValueError { .. } => "Fix the highlighted value in the site config",
            SiteError::LogoStateError { .. } => "This is a bug; please report it with the build log",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::InvalidConfigValueError { field, reason, .. } => {
                format!("The setting '{}' is invalid: {}", field, reason)
            }
            SiteError::ConfigError { message } => format!("Could not load the site config: {}", message),
            SiteError::IoError(e) => format!("Could not write the site: {}", e),
            other => format!("Site build failed: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = SiteError::InvalidConfigValueError {
            field: "site.name".to_string(),
            value: "".to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(
            err.user_friendly_message(),
            "The setting 'site.name' is invalid: Value cannot be empty or whitespace-only"
        );
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = SiteError::from(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.to_string().contains("denied"));
    }
}
