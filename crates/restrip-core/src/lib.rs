//! `restrip-core` — shared types, configuration and errors for ReStrip.
//!
//! Everything here is plain data: no task is spawned, no I/O beyond
//! reading the config file at startup.

pub mod config;
pub mod error;
pub mod types;

pub use config::RestripConfig;
pub use error::{RestripError, Result};
pub use types::{DeliveryMethod, ImageRef, ScheduledSnap, SnapId};
