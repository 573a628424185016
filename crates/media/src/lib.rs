//! Client for the hosted media CDN/transform service.
//!
//! The CDN stores uploaded files and serves them through URL-based
//! transformations. Browsers upload directly against the CDN using
//! short-lived authentication parameters minted here; the backend only ever
//! deletes files and builds URLs.

mod auth;
mod client;
mod config;
mod transform;

pub use auth::{mint_params, sign, UploadAuthParams};
pub use client::{MediaClient, MediaError};
pub use config::MediaConfig;
pub use transform::Transformation;
