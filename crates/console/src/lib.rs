//! Interactive console for the quantum vault.
//!
//! A strictly sequential read/dispatch/respond loop over any `BufRead` and
//! `Write` pair, so sessions can be scripted in tests.

pub mod config;
pub mod menu;
pub mod session;

pub use config::ConsoleConfig;
pub use menu::MenuChoice;
pub use session::{Session, SessionEnd};
