pub mod common;
pub mod items;
