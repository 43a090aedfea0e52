// Services layer - Business rules applied before touching the store
pub mod item_validator;

pub use item_validator::ItemValidator;
