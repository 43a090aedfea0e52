use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use crate::types::internal::item::{ItemStatus, ShoppingItem};

/// Request body for creating or fully replacing a shopping item
///
/// Fields are optional at the wire level so that a missing value is reported
/// as a field-level validation error rather than a body parse failure.
#[derive(Object, Debug, Clone)]
pub struct CreateItemRequest {
    /// Product name (1-100 characters)
    pub name: Option<String>,

    /// Product category, e.g. "Lácteos"
    pub category: Option<String>,

    /// Amount to buy (1-100)
    pub quantity: Option<i64>,

    /// Initial status; defaults to Planned on create and to the current
    /// status on update
    pub status: Option<ItemStatus>,
}

/// Shopping item as returned by the API
#[derive(Object, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
pub struct ItemResponse {
    /// Server-generated identifier
    pub id: Uuid,

    pub name: String,

    pub category: String,

    pub quantity: u8,

    pub status: ItemStatus,

    /// Creation time (RFC 3339), never changes after creation
    pub created_at: DateTime<Utc>,
}

impl From<ShoppingItem> for ItemResponse {
    fn from(item: ShoppingItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            category: item.category,
            quantity: item.quantity,
            status: item.status,
            created_at: item.created_at,
        }
    }
}
