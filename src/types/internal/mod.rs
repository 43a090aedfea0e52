pub mod item;

pub use item::{ItemInput, ItemStatus, ShoppingItem};
