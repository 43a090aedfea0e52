// Stores layer - In-memory data access
pub mod item_store;

pub use item_store::ItemStore;
