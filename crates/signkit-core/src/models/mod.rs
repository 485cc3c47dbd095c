//! Domain models for Signkit.

pub mod certificates;

pub use certificates::*;
