use std::net::Ipv4Addr;
use std::sync::Arc;

use crate::config::errors::ApplicationError;
use crate::config::EnvironmentProvider;

/// Resolved setting value together with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValue {
    pub value: String,
    pub source: ConfigValueSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValueSource {
    EnvironmentVariable { name: String },
    Default,
}

/// Configuration specification with environment override → default priority
pub struct ConfigSpec {
    env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    env_override: Option<String>,
    default_value: Option<String>,
    max_length: Option<usize>,
    validator: Option<fn(&str) -> Result<(), String>>,
}

impl ConfigSpec {
    pub fn new(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        Self {
            env_provider,
            env_override: None,
            default_value: None,
            max_length: None,
            validator: None,
        }
    }

    pub fn env_override(mut self, name: &str) -> Self {
        self.env_override = Some(name.to_string());
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    /// Resolve the setting: environment variable first, then the default
    ///
    /// Whichever value wins is validated before it is returned. A setting
    /// with neither source is an error.
    pub fn load_setting_with_source(&self) -> Result<ConfigValue, ApplicationError> {
        let setting_name = self.setting_name();

        if let Some(env_var) = &self.env_override {
            if let Some(value) = self.env_provider.get_var(env_var) {
                self.validate_value(&value, &setting_name)?;
                return Ok(ConfigValue {
                    value,
                    source: ConfigValueSource::EnvironmentVariable { name: env_var.clone() },
                });
            }
        }

        match &self.default_value {
            Some(default) => {
                self.validate_value(default, &setting_name)?;
                Ok(ConfigValue {
                    value: default.clone(),
                    source: ConfigValueSource::Default,
                })
            }
            None => Err(ApplicationError::invalid(
                setting_name,
                "Required setting has no value from any source",
            )),
        }
    }

    /// Validate a setting value according to the ConfigSpec rules
    pub fn validate_value(&self, value: &str, setting_name: &str) -> Result<(), ApplicationError> {
        let length = value.chars().count();

        if let Some(max_len) = self.max_length {
            if length > max_len {
                return Err(ApplicationError::invalid(
                    setting_name,
                    format!("Value must be at most {} characters long", max_len),
                ));
            }
        }

        if let Some(validator) = self.validator {
            validator(value).map_err(|reason| ApplicationError::invalid(setting_name, reason))?;
        }

        Ok(())
    }

    fn setting_name(&self) -> String {
        self.env_override
            .clone()
            .unwrap_or_else(|| "unknown_setting".to_string())
    }
}

/// Parsing and validation helpers for setting values
impl ConfigSpec {
    /// Parse a port number (1-65535)
    pub fn parse_port(value: &str, setting_name: &str) -> Result<u16, ApplicationError> {
        let port = value.trim().parse::<u16>().map_err(|e| {
            ApplicationError::parse(
                setting_name,
                format!("Expected port number (1-65535), got '{}': {}", value, e),
            )
        })?;

        if port == 0 {
            return Err(ApplicationError::invalid(
                setting_name,
                "Port number must be between 1 and 65535",
            ));
        }

        Ok(port)
    }

    /// Validate a port number is within the specified range
    pub fn validate_port_range(value: &str, min: u16, max: u16) -> Result<(), String> {
        let parsed = value
            .parse::<u16>()
            .map_err(|_| format!("Expected port number between {} and {}", min, max))?;

        if parsed < min || parsed > max {
            return Err(format!("Port {} is outside valid range {}-{}", parsed, min, max));
        }

        Ok(())
    }

    /// Validate a host address: IPv4, IPv6 (bare or bracketed) or hostname
    ///
    /// Dotted all-numeric values must be valid IPv4 addresses; no DNS lookup
    /// is performed for hostnames.
    pub fn validate_host_address(value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Err("Host address cannot be empty".to_string());
        }

        if value.chars().any(char::is_whitespace) {
            return Err("Host address cannot contain whitespace characters".to_string());
        }

        if value.contains(':') || value.starts_with('[') {
            let bare = value.trim_start_matches('[').trim_end_matches(']');
            return bare
                .parse::<std::net::Ipv6Addr>()
                .map(|_| ())
                .map_err(|_| format!("Invalid IPv6 address: '{}'", value));
        }

        let looks_like_ipv4 = value.split('.').count() == 4
            && value.split('.').all(|part| part.chars().all(|c| c.is_ascii_digit()));
        if looks_like_ipv4 {
            return value
                .parse::<Ipv4Addr>()
                .map(|_| ())
                .map_err(|_| format!("Invalid IPv4 address: '{}'", value));
        }

        Ok(())
    }
}
