use thiserror::Error;

/// Errors raised while loading settings at startup
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Invalid setting '{setting_name}': {reason}")]
    InvalidSetting { setting_name: String, reason: String },

    #[error("Failed to parse setting '{setting_name}': {error}")]
    ParseError { setting_name: String, error: String },
}

impl ApplicationError {
    pub fn invalid(setting_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            setting_name: setting_name.into(),
            reason: reason.into(),
        }
    }

    pub fn parse(setting_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self::ParseError {
            setting_name: setting_name.into(),
            error: error.into(),
        }
    }
}
