#![warn(clippy::pedantic)]

pub mod decoder;
pub mod error;

mod transform;

pub use decoder::{DecodeOutcome, L64Decoder};
pub use error::DecodeError;
pub use l64_wire::{CurrentVariant, LegacyVersion, Scheme};
