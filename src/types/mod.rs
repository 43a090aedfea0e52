// Types layer - All data structures
pub mod dto;
pub mod internal;
