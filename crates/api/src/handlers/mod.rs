//! Request handlers, one submodule per resource.
//!
//! Handlers validate input, delegate to the repositories in `reelshare_db`
//! and the external-service clients, and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod auth;
pub mod generate;
pub mod media;
pub mod posts;
pub mod profile;
