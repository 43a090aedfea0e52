use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ApplicationError;
use crate::config::EnvironmentProvider;

/// Longest host name accepted for `HOST` (DNS limit)
const MAX_HOST_LENGTH: usize = 253;

/// Deployment environment the service runs in
///
/// Only `Development` exposes diagnostic detail in 500 responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Production,
}

impl AppEnvironment {
    pub fn is_development(&self) -> bool {
        matches!(self, AppEnvironment::Development)
    }
}

impl FromStr for AppEnvironment {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(AppEnvironment::Development),
            "production" | "prod" => Ok(AppEnvironment::Production),
            other => Err(format!(
                "Expected 'development' or 'production', got '{}'",
                other
            )),
        }
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppEnvironment::Development => write!(f, "development"),
            AppEnvironment::Production => write!(f, "production"),
        }
    }
}

/// Settings needed before the server can start
pub struct BootstrapSettings {
    server_host: String,
    server_port: u16,
    environment: AppEnvironment,
}

impl BootstrapSettings {
    /// Load bootstrap settings through the given environment provider
    ///
    /// * `HOST` - bind address, default `0.0.0.0`
    /// * `PORT` - bind port, default `3000`
    /// * `APP_ENV` - `development` or `production`, default `production`
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ApplicationError> {
        let host_spec = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value("0.0.0.0")
            .max_length(MAX_HOST_LENGTH)
            .validator(ConfigSpec::validate_host_address);

        let port_spec = ConfigSpec::new(env_provider.clone())
            .env_override("PORT")
            .default_value("3000")
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535));

        let environment_spec = ConfigSpec::new(env_provider)
            .env_override("APP_ENV")
            .default_value("production")
            .validator(|value| AppEnvironment::from_str(value).map(|_| ()));

        let host = host_spec.load_setting_with_source()?;
        tracing::debug!(source = ?host.source, "Resolved HOST");
        let server_host = host.value;

        let port = port_spec.load_setting_with_source()?;
        tracing::debug!(source = ?port.source, "Resolved PORT");
        let server_port = ConfigSpec::parse_port(&port.value, "PORT")?;

        let environment_value = environment_spec.load_setting_with_source()?;
        tracing::debug!(source = ?environment_value.source, "Resolved APP_ENV");
        let environment = AppEnvironment::from_str(&environment_value.value)
            .map_err(|reason| ApplicationError::invalid("APP_ENV", reason))?;

        Ok(Self {
            server_host,
            server_port,
            environment,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// `host:port`, bracketing bare IPv6 hosts so the result is bindable
    pub fn server_address(&self) -> String {
        if self.server_host.contains(':') && !self.server_host.starts_with('[') {
            format!("[{}]:{}", self.server_host, self.server_port)
        } else {
            format!("{}:{}", self.server_host, self.server_port)
        }
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("environment", &self.environment)
            .finish()
    }
}
