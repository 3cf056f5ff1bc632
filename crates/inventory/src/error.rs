use thiserror::Error;

use qvault_core::{DomainError, ObjectId};
use qvault_objects::{ObjectError, ObjectKind};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InventoryError {
    /// No objects stored yet.
    #[error("storage is empty")]
    StorageEmpty,

    /// No stored id matches the query (case-insensitive).
    #[error("object not found: {0}")]
    NotFound(String),

    #[error("{kind} {id} is not cooling-capable")]
    NotCoolingCapable { id: ObjectId, kind: ObjectKind },

    /// Fatal: the object's stability hit the floor.
    #[error("quantum collapse! failing object id: {0}")]
    Collapse(ObjectId),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl InventoryError {
    /// Only a collapse ends the session; every other error is reported and
    /// the loop continues.
    pub fn is_fatal(&self) -> bool {
        matches!(self, InventoryError::Collapse(_))
    }
}

impl From<ObjectError> for InventoryError {
    fn from(value: ObjectError) -> Self {
        match value {
            ObjectError::Collapsed(id) => InventoryError::Collapse(id),
            ObjectError::Domain(err) => InventoryError::Domain(err),
        }
    }
}
