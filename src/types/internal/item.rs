use chrono::{DateTime, Utc};
use poem_openapi::Enum;
use uuid::Uuid;

/// Lifecycle status of a shopping item
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[oai(rename_all = "PascalCase")]
pub enum ItemStatus {
    /// Planned for the next trip
    #[default]
    Planned,
    /// Already bought
    Purchased,
    /// Not available at the store
    OutOfStock,
}

/// Stored shopping item record
///
/// `id` and `created_at` are assigned by the store on creation and carried
/// unchanged through every later replacement of the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingItem {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub quantity: u8,
    pub status: ItemStatus,
    pub created_at: DateTime<Utc>,
}

/// Validated input for create and update operations
///
/// `status: None` means the caller omitted it: create falls back to
/// `Planned`, update keeps the stored status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInput {
    pub name: String,
    pub category: String,
    pub quantity: u8,
    pub status: Option<ItemStatus>,
}

impl ShoppingItem {
    /// Build a fresh record from validated input
    pub fn new(id: Uuid, input: ItemInput, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            category: input.category,
            quantity: input.quantity,
            status: input.status.unwrap_or_default(),
            created_at,
        }
    }

    /// Replacement record for a full update, keeping identity and creation time
    pub fn replaced_with(&self, input: &ItemInput) -> Self {
        Self {
            id: self.id,
            name: input.name.clone(),
            category: input.category.clone(),
            quantity: input.quantity,
            status: input.status.unwrap_or(self.status),
            created_at: self.created_at,
        }
    }

    /// Copy of this record with status set to `Purchased`
    pub fn purchased(&self) -> Self {
        Self {
            status: ItemStatus::Purchased,
            ..self.clone()
        }
    }
}
