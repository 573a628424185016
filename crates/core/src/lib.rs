//! Domain core for the reelshare platform.
//!
//! Pure types and logic shared by the database, service-client, and API
//! crates. Nothing in here touches the network or the database.

pub mod error;
pub mod media_kind;
pub mod types;
pub mod validation;
