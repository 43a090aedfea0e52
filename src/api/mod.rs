// API layer - HTTP endpoints
pub mod fault;
pub mod health;
pub mod items;

pub use health::HealthApi;
pub use items::ItemsApi;

use poem::{Endpoint, Response, Route};
use poem_openapi::OpenApiService;

use crate::app_data::AppData;

/// Compose the full HTTP application from the shared application data
///
/// Used by `main` and by the integration tests so both exercise the same
/// routes and fault handling.
pub fn build_app(app_data: &AppData) -> impl Endpoint<Output = Response> {
    let expose_fault_details = app_data.settings.environment().is_development();

    let items_api = ItemsApi::new(app_data.item_store.clone(), expose_fault_details);

    let api_service = OpenApiService::new(
        (HealthApi, items_api),
        "Shopping List API",
        env!("CARGO_PKG_VERSION"),
    );

    let app = Route::new().nest("/", api_service);

    fault::with_fault_handling(app, expose_fault_details)
}
