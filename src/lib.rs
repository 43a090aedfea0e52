// Library exports for integration tests and the server binary

pub mod api;
pub mod app_data;
pub mod config;
pub mod errors;
pub mod services;
pub mod stores;
pub mod types;
