pub mod bootstrap_settings;
pub mod config_spec;
pub mod env_provider;
pub mod errors;
pub mod logging;

pub use bootstrap_settings::{AppEnvironment, BootstrapSettings};
pub use config_spec::ConfigSpec;
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
#[cfg(test)]
pub use env_provider::MockEnvironment;
pub use errors::ApplicationError;
pub use logging::{init_logging, LoggingConfig, LoggingError};
