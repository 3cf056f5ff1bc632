//! Inventory controller.
//!
//! Owns the append-only collection of quantum objects plus the shared id
//! counter, and routes user commands to the object model. A stability
//! collapse comes back as `InventoryError::Collapse`; everything else is a
//! recoverable rejection.

pub mod blueprint;
pub mod controller;
pub mod error;

pub use blueprint::Blueprint;
pub use controller::{Inventory, Listing, Outcome};
pub use error::InventoryError;
