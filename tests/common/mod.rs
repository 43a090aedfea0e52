// Common test utilities for integration tests

use std::collections::HashMap;
use std::sync::Arc;

use poem::test::TestClient;
use poem::{Endpoint, Response};
use shopping_list_api::api::build_app;
use shopping_list_api::app_data::AppData;
use shopping_list_api::config::{BootstrapSettings, EnvironmentProvider};

/// Environment provider backed by a fixed map
///
/// Keeps integration tests away from the process-global environment.
pub struct TestEnvironment(HashMap<String, String>);

impl TestEnvironment {
    pub fn new(vars: &[(&str, &str)]) -> Self {
        Self(
            vars.iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }
}

impl EnvironmentProvider for TestEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

/// Builds AppData for the given `APP_ENV`
pub fn create_test_app_data(app_env: &str) -> AppData {
    let settings = BootstrapSettings::from_env_provider(Arc::new(TestEnvironment::new(&[
        ("APP_ENV", app_env),
    ])))
    .expect("Failed to load test settings");

    AppData::init(settings)
}

/// Creates a test client over the full application, plus the AppData it uses
pub fn setup_test_client() -> (AppData, TestClient<impl Endpoint<Output = Response>>) {
    let app_data = create_test_app_data("production");
    let client = TestClient::new(build_app(&app_data));
    (app_data, client)
}
