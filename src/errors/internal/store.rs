use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    /// A freshly generated id was already present in the store
    #[error("Item id collision: {0}")]
    IdCollision(Uuid),
}
