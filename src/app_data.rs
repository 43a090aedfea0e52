use std::sync::Arc;

use crate::config::BootstrapSettings;
use crate::stores::ItemStore;

/// Centralized application data following the main-owned stores pattern
///
/// Created once in `main` and shared with the API layer for the lifetime of
/// the process. The item store lives only in memory and starts empty.
pub struct AppData {
    pub settings: BootstrapSettings,
    pub item_store: Arc<ItemStore>,
}

impl AppData {
    pub fn init(settings: BootstrapSettings) -> Self {
        tracing::debug!(environment = %settings.environment(), "Initializing AppData");

        Self {
            settings,
            item_store: Arc::new(ItemStore::new()),
        }
    }
}
