//! Domain events and the deterministic command execution helper.

pub mod event;
pub mod handler;

pub use event::Event;
pub use handler::execute;
