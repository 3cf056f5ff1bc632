//! Quantum object model.
//!
//! Three record variants share one stability state machine: analysis depletes
//! stability, cooling restores it, and hitting the floor collapses the object.
//! Pure domain logic (no IO, no randomness).

pub mod kind;
pub mod object;
pub mod stability;

pub use kind::{Capability, ObjectKind};
pub use object::{
    ObjectCollapsed, ObjectCommand, ObjectError, ObjectEvent, ObjectState, QuantumObject,
    Reaction, StabilityDepleted, StabilityRestored,
};
pub use stability::{DangerLevel, Stability};
