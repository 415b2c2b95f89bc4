//! `restrip-delivery` — seams to the services that store images, crop them,
//! and eventually send the memory back.
//!
//! Only the interfaces live here. The real backends (object storage, the
//! remote crop model, the outbound mailer/bot) are deployed separately; the
//! in-memory stand-ins in this crate are what the gateway runs with until
//! those are wired up, and what the tests drive.

pub mod crop;
pub mod sink;
pub mod store;

pub use crop::{AutoCrop, PassthroughCrop};
pub use sink::{DeliverySink, LoggingSink};
pub use store::{ImageStore, MemoryImageStore, StoredImage};
