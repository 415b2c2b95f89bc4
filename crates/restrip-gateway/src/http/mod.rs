pub mod health;
pub mod process;
pub mod snaps;
pub mod upload;
