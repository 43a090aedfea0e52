use thiserror::Error;

pub mod store;

pub use store::StoreError;

/// Internal error type for store operations
///
/// Not exposed via API: endpoints convert these to `ItemError` explicitly.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
