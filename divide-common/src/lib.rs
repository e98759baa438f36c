//! # divide-common
//!
//! Shared code for the digitaldivide.ai services:
//! - Configuration resolution (CLI, environment, config file, defaults)
//! - Common error types
//! - Domain models shared between handlers and tests
//! - Language progress scoring

pub mod config;
pub mod error;
pub mod models;
pub mod progress;

pub use error::{Error, Result};
