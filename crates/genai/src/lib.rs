//! Client for the hosted generative-AI captioning API.
//!
//! Given an inline image payload and a caption mode, forwards a
//! generate-content request with a fixed instruction string and returns the
//! model's raw text. No retries, no caching.

mod caption;
mod client;
mod config;

pub use caption::CaptionMode;
pub use client::{GenAiClient, GenAiError};
pub use config::GenAiConfig;
