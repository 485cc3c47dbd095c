//! Signkit Core Library
//!
//! Lookup table, record model, and encoding pipeline that turn binary signing
//! artifacts into a JSON document a text-only secret store can carry.

pub mod config;
pub mod encoder;
pub mod error;
pub mod models;
pub mod tokens;

pub use config::{EncoderConfig, KeyOrder};
pub use error::{Result, SecretsError};
