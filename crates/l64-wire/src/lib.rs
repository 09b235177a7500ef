#![warn(clippy::pedantic)]

pub mod error;
pub mod header;
pub mod tables;

pub use error::WireError;
pub use header::{CurrentVariant, LegacyVersion, Scheme};
